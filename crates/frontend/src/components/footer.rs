use chrono::{Datelike, Local};
use softsell_core::content::{BRAND, FOOTER_LINKS, FOOTER_TAGLINE, LinkGroup, SOCIAL_LINKS};
use yew::prelude::*;

fn social_icon(name: &str) -> &'static str {
    match name {
        "LinkedIn" => "M16 8a6 6 0 016 6v7h-4v-7a2 2 0 00-4 0v7h-4v-7a6 6 0 016-6zM2 9h4v12H2zM4 2a2 2 0 110 4 2 2 0 010-4z",
        "Twitter" => "M23 3a10.9 10.9 0 01-3.14 1.53 4.48 4.48 0 00-7.86 3v1A10.66 10.66 0 013 4s-4 9 5 13a11.64 11.64 0 01-7 2c9 5 20 0 20-11.5a4.5 4.5 0 00-.08-.83A7.72 7.72 0 0023 3z",
        _ => "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 00-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0020 4.77 5.07 5.07 0 0019.91 1S18.73.65 16 2.48a13.38 13.38 0 00-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 005 4.77a5.44 5.44 0 00-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 009 18.13V22",
    }
}

fn copyright(year: i32) -> String {
    format!("\u{a9} {year} {BRAND}, Inc. All rights reserved.")
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_memo((), |_| Local::now().year());

    html! {
        <footer class="bg-secondary-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-16 pb-8">
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-8">
                    <div class="col-span-2 md:col-span-3 lg:col-span-1">
                        <a href="#hero" class="flex items-center mb-5">
                            <span class="h-8 w-8 bg-primary-600 rounded-md flex items-center justify-center mr-2">
                                <svg class="w-5 h-5 text-white" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z" />
                                </svg>
                            </span>
                            <span class="text-xl font-bold text-white">{BRAND}</span>
                        </a>
                        <p class="text-secondary-300 mb-4 max-w-xs">{FOOTER_TAGLINE}</p>
                        <div class="flex space-x-4">
                            { for SOCIAL_LINKS.iter().map(|name| html! {
                                <a key={*name} href="#" class="text-secondary-400 hover:text-white transition-colors">
                                    <span class="sr-only">{*name}</span>
                                    <svg class="h-6 w-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={social_icon(name)} />
                                    </svg>
                                </a>
                            }) }
                        </div>
                    </div>

                    { for FOOTER_LINKS.iter().map(|LinkGroup { title, links }| html! {
                        <div key={*title} class="mt-4 md:mt-0">
                            <h3 class="text-sm font-semibold tracking-wider uppercase mb-4 text-white">{*title}</h3>
                            <ul class="space-y-3">
                                { for links.iter().map(|link| html! {
                                    <li key={*link}>
                                        <a href="#" class="text-sm text-secondary-300 hover:text-white transition-colors">{*link}</a>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="mt-12 pt-8 border-t border-secondary-800">
                    <div class="flex flex-col md:flex-row justify-between items-center">
                        <p class="text-sm text-secondary-400">{copyright(*year)}</p>
                        <div class="mt-4 md:mt-0">
                            <img class="h-12" src="https://via.placeholder.com/240x48?text=Payment+Methods" alt="Payment methods" />
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
