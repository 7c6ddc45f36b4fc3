use softsell_core::SectionId;
use softsell_core::content::{PLATFORM_STATS, STEPS, Step};
use softsell_frontend_common::SectionHeading;
use yew::prelude::*;

fn step_icon(number: u8) -> Html {
    let path = match number {
        1 => "M4 16v1a3 3 0 003 3h10a3 3 0 003-3v-1m-4-8l-4-4m0 0L8 8m4-4v12",
        2 => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        _ => "M8 7h12m0 0l-4-4m4 4l-4 4m0 6H4m0 0l4 4m-4-4l4-4",
    };
    html! {
        <svg class="w-12 h-12" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={path} />
        </svg>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct StepCardProps {
    step: Step,
    is_last: bool,
}

#[function_component(StepCard)]
fn step_card(props: &StepCardProps) -> Html {
    let Step { number, title, description } = props.step;
    html! {
        <div class="relative">
            if !props.is_last {
                <div class="absolute hidden md:block h-0.5 bg-primary-100 dark:bg-primary-700/30 top-24 left-1/2 w-full z-0"></div>
            }
            <div class="bg-blue-50/80 dark:bg-secondary-900/60 rounded-3xl p-8 pb-10 relative z-10 h-full flex flex-col items-center shadow-sm">
                <div class="bg-primary-500 dark:bg-primary-600 text-white w-14 h-14 rounded-full flex items-center justify-center text-xl font-bold mb-6 shadow-lg">
                    {number.to_string()}
                </div>
                <div class="text-primary-500 dark:text-primary-400 mb-6">{step_icon(number)}</div>
                <h3 class="text-xl font-bold text-secondary-900 dark:text-white mb-3">{title}</h3>
                <p class="text-secondary-600 dark:text-secondary-300 text-center">{description}</p>
            </div>
        </div>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id={SectionId::HowItWorks.anchor()} class="py-24 bg-white dark:bg-secondary-950">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="How SoftSell Works"
                    subtitle="Our platform makes it simple to buy and sell software licenses in just three easy steps"
                />

                <div class="grid md:grid-cols-3 gap-6 lg:gap-10 max-w-5xl mx-auto mb-24">
                    { for STEPS.iter().map(|step| html! {
                        <StepCard key={step.title} step={*step} is_last={usize::from(step.number) == STEPS.len()} />
                    }) }
                </div>

                <div class="bg-gradient-to-r from-primary-600 to-primary-700 dark:from-primary-700 dark:to-primary-800 rounded-2xl p-8 md:p-12 shadow-xl">
                    <div class="grid md:grid-cols-2 gap-8 lg:gap-12 items-center">
                        <div>
                            <h3 class="text-2xl sm:text-3xl font-bold text-white mb-6">
                                {"Ready to maximize the value of your software investments?"}
                            </h3>
                            <p class="text-primary-100 mb-8 text-lg">
                                {"Join thousands of businesses already buying and selling on SoftSell. Get started in minutes."}
                            </p>
                            <div class="flex flex-wrap gap-4">
                                <button class="bg-white text-primary-700 hover:bg-primary-50 px-8 py-3 rounded-lg font-medium text-lg shadow-lg transition-all">
                                    {"Start Selling Today"}
                                </button>
                                <button class="bg-primary-800/30 hover:bg-primary-800/50 text-white border border-primary-400/30 px-8 py-3 rounded-lg font-medium text-lg transition-all">
                                    {"Browse Marketplace"}
                                </button>
                            </div>
                        </div>

                        <div class="grid grid-cols-2 sm:grid-cols-4 md:grid-cols-2 gap-6">
                            { for PLATFORM_STATS.iter().map(|stat| html! {
                                <div key={stat.label} class="bg-white/10 rounded-xl p-5 text-center border border-white/10">
                                    <div class="text-2xl md:text-3xl font-bold text-white mb-1">{stat.value}</div>
                                    <div class="text-primary-200 text-sm">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
