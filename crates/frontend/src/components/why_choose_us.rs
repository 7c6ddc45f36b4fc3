use softsell_core::SectionId;
use softsell_core::content::{FEATURES, Feature, SAVINGS_STATS};
use yew::prelude::*;

const FEATURE_ICONS: [&str; 4] = [
    "M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
    "M13 10V3L4 14h7v7l9-11h-7z",
    "M18.364 5.636l-3.536 3.536m0 5.656l3.536 3.536M9.172 9.172L5.636 5.636m3.536 9.192l-3.536 3.536M21 12a9 9 0 11-18 0 9 9 0 0118 0zm-5 0a4 4 0 11-8 0 4 4 0 018 0z",
];

#[derive(Properties, Clone, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
    icon: &'static str,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let Feature { title, description } = props.feature;
    html! {
        <div class="bg-white dark:bg-secondary-900 rounded-2xl p-6 shadow-sm hover:shadow-md transition-shadow flex flex-col h-full">
            <div class="w-12 h-12 rounded-xl bg-primary-50 dark:bg-primary-900/30 text-primary-600 dark:text-primary-400 flex items-center justify-center mb-5">
                <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={props.icon} />
                </svg>
            </div>
            <h3 class="text-xl font-bold text-secondary-900 dark:text-white mb-3">{title}</h3>
            <p class="text-secondary-600 dark:text-secondary-400 mb-4">{description}</p>
            <div class="mt-auto">
                <a href="#" class="inline-flex items-center text-primary-600 dark:text-primary-400 font-medium hover:text-primary-700 dark:hover:text-primary-300">
                    {"Learn more"}
                </a>
            </div>
        </div>
    }
}

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <section id={SectionId::WhyChooseUs.anchor()} class="py-24 bg-secondary-50 dark:bg-secondary-900/40">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-5 gap-12 items-start">
                    <div class="lg:col-span-2">
                        <span class="inline-block text-sm font-semibold uppercase tracking-wider text-primary-600 dark:text-primary-400 mb-4">
                            {"Why Choose Us"}
                        </span>
                        <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold tracking-tight text-secondary-900 dark:text-white mb-6">
                            {"We're Revolutionizing Software Asset Management"}
                        </h2>
                        <p class="text-lg text-secondary-600 dark:text-secondary-400 mb-8">
                            {"Our platform enables businesses of all sizes to optimize their software costs and extract value from unused licenses, creating a win-win marketplace for buyers and sellers."}
                        </p>
                        <div class="flex flex-col sm:flex-row gap-y-4 gap-x-8">
                            { for SAVINGS_STATS.iter().map(|stat| html! {
                                <div key={stat.label}>
                                    <div class="text-3xl font-bold text-primary-600 dark:text-primary-400">{stat.value}</div>
                                    <div class="text-sm text-secondary-600 dark:text-secondary-400">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="lg:col-span-3 grid sm:grid-cols-2 gap-6">
                        { for FEATURES.iter().zip(FEATURE_ICONS).map(|(feature, icon)| html! {
                            <FeatureCard key={feature.title} feature={*feature} {icon} />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
