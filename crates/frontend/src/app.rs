use crate::components::{Contact, Footer, Header, Hero, HowItWorks, Testimonials, WhyChooseUs};
use softsell_chat_ui::ChatWidget;
use softsell_core::Timings;
use softsell_frontend_common::ThemeProvider;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub timings: Timings,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ThemeProvider>
            <div class="min-h-screen bg-white text-secondary-900 dark:bg-secondary-950 dark:text-secondary-100 transition-colors">
                <Header />
                <main class="min-h-screen">
                    <Hero />
                    <HowItWorks />
                    <WhyChooseUs />
                    <Testimonials />
                    <Contact timings={props.timings} />
                </main>
                <Footer />
                <ChatWidget timings={props.timings} />
            </div>
        </ThemeProvider>
    }
}
