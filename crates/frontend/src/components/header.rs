use softsell_core::SectionId;
use softsell_frontend_common::{ThemeToggle, use_scroll_spy};
use yew::prelude::*;

/// Fixed top bar with scroll-spy navigation, theme toggle and mobile menu
#[function_component(Header)]
pub fn header() -> Html {
    let scroll = use_scroll_spy();
    let menu_open = use_state(|| false);

    let navigate = {
        let menu_open = menu_open.clone();
        let go = scroll.navigate.clone();
        Callback::from(move |id: SectionId| {
            menu_open.set(false);
            go.emit(id);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let spy = scroll.spy;
    let header_class = if spy.is_scrolled {
        "bg-white/95 backdrop-blur-md shadow-lg py-2 dark:bg-secondary-950/95"
    } else {
        "bg-transparent py-4"
    };

    let desktop_links = SectionId::ALL.into_iter().map(|id| {
        let is_active = spy.active == id;
        let onclick = navigate.reform(move |_: MouseEvent| id);
        let color = if is_active {
            "text-primary-600 dark:text-primary-400"
        } else {
            "text-secondary-700 hover:text-primary-600 dark:text-secondary-300 dark:hover:text-primary-400"
        };
        html! {
            <button key={id.anchor()} {onclick} class={classes!("relative", "px-4", "py-2", "text-sm", "font-medium", "rounded-md", "transition-colors", color)}>
                {id.label()}
                if is_active {
                    <span class="absolute bottom-0 left-0 right-0 h-0.5 bg-primary-500 dark:bg-primary-400 rounded-full"></span>
                }
            </button>
        }
    });

    let mobile_links = SectionId::ALL.into_iter().map(|id| {
        let is_active = spy.active == id;
        let onclick = navigate.reform(move |_: MouseEvent| id);
        let color = if is_active {
            "bg-primary-50 text-primary-600 dark:bg-primary-900/30 dark:text-primary-400"
        } else {
            "text-secondary-700 dark:text-secondary-300 hover:bg-gray-100 dark:hover:bg-secondary-800/80"
        };
        html! {
            <button key={id.anchor()} {onclick} class={classes!("flex", "items-center", "w-full", "px-4", "py-2.5", "rounded-lg", color)}>
                if is_active {
                    <span class="w-1 h-5 bg-primary-500 dark:bg-primary-400 rounded-full mr-3"></span>
                }
                <span class={classes!((!is_active).then_some("ml-4"))}>{id.label()}</span>
            </button>
        }
    });

    let on_logo = navigate.reform(|_: MouseEvent| SectionId::Hero);

    html! {
        <header class={classes!("fixed", "top-0", "left-0", "right-0", "z-40", "transition-all", "duration-300", header_class)}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center">
                    <button onclick={on_logo} class="flex items-center group" aria-label="SoftSell home">
                        <span class="h-10 w-10 bg-gradient-to-br from-primary-500 to-primary-700 rounded-lg flex items-center justify-center shadow-lg mr-3 group-hover:scale-105 transition-transform">
                            <svg class="w-5 h-5 text-white" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z" />
                            </svg>
                        </span>
                        <span class="text-xl font-bold tracking-tight text-secondary-900 dark:text-white">
                            {"Soft"}<span class="text-primary-600 dark:text-primary-400">{"Sell"}</span>
                        </span>
                    </button>

                    <nav class="hidden md:flex space-x-1">
                        { for desktop_links }
                    </nav>

                    <div class="hidden md:flex items-center space-x-4">
                        <ThemeToggle />
                        <button class="text-sm font-medium px-4 py-2 rounded-lg text-primary-600 hover:bg-primary-50 dark:text-primary-400 dark:hover:bg-primary-900/30">
                            {"Log in"}
                        </button>
                        <button class="bg-primary-600 hover:bg-primary-700 text-white text-sm font-medium px-5 py-2.5 rounded-lg shadow">
                            {"Sign up"}
                        </button>
                    </div>

                    <div class="md:hidden flex items-center space-x-3">
                        <ThemeToggle />
                        <button onclick={toggle_menu} class="p-2 rounded-md text-secondary-700 dark:text-white" aria-label="Toggle menu">
                            if *menu_open {
                                <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                                </svg>
                            } else {
                                <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                                </svg>
                            }
                        </button>
                    </div>
                </div>

                if *menu_open {
                    <div class="md:hidden mt-4 rounded-xl overflow-hidden bg-white/90 dark:bg-secondary-900/90 backdrop-blur-md shadow-lg">
                        <div class="py-3 px-4 space-y-1">
                            { for mobile_links }
                            <div class="grid grid-cols-2 gap-3 pt-4 mt-3 border-t border-gray-200 dark:border-secondary-700/50">
                                <button class="px-3 py-2.5 text-primary-600 dark:text-primary-400 font-medium hover:bg-primary-50 dark:hover:bg-primary-900/30 rounded-lg">
                                    {"Log in"}
                                </button>
                                <button class="bg-primary-600 hover:bg-primary-700 text-white font-medium py-2.5 rounded-lg">
                                    {"Sign up"}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            </div>
        </header>
    }
}
