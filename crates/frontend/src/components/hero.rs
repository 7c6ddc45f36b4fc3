use softsell_core::SectionId;
use softsell_core::content::{HERO_BADGE, HERO_BENEFITS, HERO_TAGLINE, Listing, MARKETPLACE_LISTINGS};
use yew::prelude::*;

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[function_component(ListingCard)]
fn listing_card(props: &ListingCardProps) -> Html {
    let Listing { name, price, discount } = props.listing;
    html! {
        <div class="bg-secondary-50 dark:bg-secondary-800/50 p-3.5 rounded-lg shadow-sm hover:shadow-md transition-shadow cursor-pointer">
            <div class="flex justify-between items-start mb-2">
                <div class="h-8 w-8 bg-gradient-to-br from-primary-100 to-primary-200 dark:from-primary-800 dark:to-primary-700 rounded-md flex items-center justify-center text-primary-700 dark:text-primary-300 text-xs">
                    {initials(name)}
                </div>
                <div class="text-xs font-medium bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-400 px-1.5 py-0.5 rounded">
                    {discount}
                </div>
            </div>
            <div class="text-sm font-medium text-secondary-900 dark:text-secondary-100 mb-1 truncate">{name}</div>
            <div class="text-sm text-primary-600 dark:text-primary-400 font-bold">
                {price}<span class="text-xs text-secondary-500 dark:text-secondary-400 font-normal">{"/mo"}</span>
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ListingCardProps {
    listing: Listing,
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={SectionId::Hero.anchor()} class="relative overflow-hidden pt-28 lg:pt-32 pb-20">
            <div class="absolute inset-0 bg-gradient-to-b from-primary-500/10 via-primary-500/5 to-transparent dark:from-primary-900/20 dark:via-primary-900/10 -z-10"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-8 items-center">
                    <div class="relative z-10">
                        <div class="inline-flex items-center px-4 py-2 rounded-full bg-primary-50 dark:bg-primary-900/40 border border-primary-100 dark:border-primary-700/40 mb-6 text-sm font-medium text-primary-700 dark:text-primary-300">
                            <span class="relative flex h-2 w-2 mr-2">
                                <span class="animate-ping absolute inline-flex h-2 w-2 rounded-full bg-primary-400 opacity-75"></span>
                                <span class="relative inline-flex rounded-full h-2 w-2 bg-primary-500"></span>
                            </span>
                            {HERO_BADGE}
                        </div>

                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-6 tracking-tight text-secondary-950 dark:text-white">
                            <span class="text-primary-600 dark:text-primary-400">{"Monetize"}</span>
                            {" Your Unused Software Licenses"}
                        </h1>

                        <p class="text-lg md:text-xl text-secondary-700 dark:text-secondary-300 mb-8 max-w-xl">
                            {HERO_TAGLINE}
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 mb-12">
                            <button class="bg-primary-600 hover:bg-primary-700 text-white font-medium rounded-lg shadow-lg py-3 px-8 text-lg transition-colors">
                                {"Sell Your Licenses"}
                            </button>
                            <button class="bg-white dark:bg-secondary-800 text-secondary-800 dark:text-white border border-secondary-200 dark:border-secondary-700 font-medium rounded-lg py-3 px-8 text-lg transition-colors">
                                {"Browse Marketplace"}
                            </button>
                        </div>

                        <div class="grid grid-cols-2 gap-4 max-w-xl">
                            { for HERO_BENEFITS.iter().map(|benefit| html! {
                                <div key={*benefit} class="flex items-center space-x-2 text-sm sm:text-base text-secondary-800 dark:text-secondary-200">
                                    <svg class="w-4 h-4 text-primary-500 flex-shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
                                    </svg>
                                    <span>{*benefit}</span>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="relative lg:ml-6">
                        <div class="relative bg-white dark:bg-secondary-900 rounded-2xl shadow-xl">
                            <div class="absolute -top-6 -right-6 z-10 bg-gradient-to-br from-primary-500 to-primary-700 text-white p-4 rounded-full shadow-xl">
                                <span class="text-xs font-medium uppercase">{"Save up to"}</span>
                                <span class="text-2xl font-bold block">{"70%"}</span>
                            </div>

                            <div class="p-5 border-b border-secondary-100 dark:border-secondary-800 flex justify-between items-center">
                                <h3 class="font-medium text-secondary-900 dark:text-white">{"Software Marketplace"}</h3>
                                <div class="flex space-x-1">
                                    <div class="w-3 h-3 rounded-full bg-red-400"></div>
                                    <div class="w-3 h-3 rounded-full bg-yellow-400"></div>
                                    <div class="w-3 h-3 rounded-full bg-green-400"></div>
                                </div>
                            </div>

                            <div class="p-6">
                                <div class="grid grid-cols-2 sm:grid-cols-3 gap-4">
                                    { for MARKETPLACE_LISTINGS.iter().map(|listing| html! {
                                        <ListingCard key={listing.name} listing={*listing} />
                                    }) }
                                </div>

                                <div class="mt-6 pt-4 border-t border-secondary-100 dark:border-secondary-800 flex justify-between items-center">
                                    <div>
                                        <div class="text-xs text-secondary-500 dark:text-secondary-400">{"Average savings"}</div>
                                        <div class="text-lg font-bold text-primary-600 dark:text-primary-400">{"60% off retail"}</div>
                                    </div>
                                    <button class="bg-primary-600 hover:bg-primary-700 text-white rounded-lg text-sm py-2 px-4">
                                        {"View All Listings"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
