use softsell_core::content::{MAX_RATING, TESTIMONIALS, Testimonial};
use softsell_core::{Carousel, SectionId};
use softsell_frontend_common::SectionHeading;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
    #[prop_or_default]
    featured: bool,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let Testimonial { quote, name, title, company, rating, image } = props.testimonial;
    let border = props
        .featured
        .then_some("border-primary-200 dark:border-primary-800");

    html! {
        <div class={classes!("bg-white", "dark:bg-secondary-900", "rounded-2xl", "shadow-sm", "border", "border-secondary-100", "dark:border-secondary-800", "h-full", border)}>
            <div class="p-8 sm:p-10 flex flex-col h-full">
                <div class="flex mb-4" aria-label={format!("{rating} out of {MAX_RATING} stars")}>
                    { for (0..MAX_RATING).map(|star| {
                        let color = if star < rating {
                            "fill-amber-400 text-amber-400"
                        } else {
                            "text-secondary-300 dark:text-secondary-700"
                        };
                        html! {
                            <svg class={classes!("w-5", "h-5", color)} fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z" />
                            </svg>
                        }
                    }) }
                </div>
                <p class="text-secondary-700 dark:text-secondary-300 mb-8 text-lg leading-relaxed">
                    {format!("\"{quote}\"")}
                </p>
                <div class="flex items-center mt-auto">
                    <div class="w-12 h-12 rounded-full mr-4 flex-shrink-0 overflow-hidden border border-secondary-200 dark:border-secondary-700">
                        <img src={image} alt={name} width="48" height="48" class="object-cover w-full h-full" />
                    </div>
                    <div>
                        <h4 class="font-bold text-secondary-900 dark:text-white">{name}</h4>
                        <p class="text-sm text-secondary-600 dark:text-secondary-400">{format!("{title}, {company}")}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CarouselViewProps {
    initial: Carousel,
}

/// Single-card view with dots and arrows, shown below the `lg` breakpoint
#[function_component(CarouselView)]
fn carousel_view(props: &CarouselViewProps) -> Html {
    let initial = props.initial;
    let carousel = use_state(move || initial);
    let current = *carousel;

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.previous()))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };

    let dots = (0..current.len()).map(|index| {
        let carousel = carousel.clone();
        let onclick = Callback::from(move |_: MouseEvent| match carousel.select(index) {
            Ok(next) => carousel.set(next),
            Err(err) => tracing::warn!(%err, "ignoring testimonial selection"),
        });
        let style = if current.is_current(index) {
            "bg-primary-600 dark:bg-primary-400 w-6"
        } else {
            "bg-secondary-300 dark:bg-secondary-700"
        };
        html! {
            <button
                key={index}
                {onclick}
                class={classes!("w-2.5", "h-2.5", "rounded-full", "transition-all", style)}
                aria-label={format!("Go to testimonial {}", index + 1)}
            />
        }
    });

    let arrow_class = "p-2 rounded-full border border-secondary-200 dark:border-secondary-700 text-secondary-700 dark:text-secondary-400 hover:bg-secondary-100 dark:hover:bg-secondary-800 transition-colors";

    html! {
        <div class="lg:hidden">
            if let Some(testimonial) = TESTIMONIALS.get(current.index()) {
                <TestimonialCard testimonial={*testimonial} featured={true} />
            }
            <div class="flex items-center justify-between mt-8">
                <div class="flex items-center space-x-2">
                    { for dots }
                </div>
                <div class="flex space-x-2">
                    <button onclick={on_previous} class={arrow_class} aria-label="Previous testimonial">
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 12H5m7 7l-7-7 7-7" />
                        </svg>
                    </button>
                    <button onclick={on_next} class={arrow_class} aria-label="Next testimonial">
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 12h14m-7-7l7 7-7 7" />
                        </svg>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_memo((), |_| Carousel::new(TESTIMONIALS.len()));

    let mobile = match &*carousel {
        Ok(initial) => html! { <CarouselView initial={*initial} /> },
        Err(err) => {
            tracing::warn!(%err, "testimonial carousel disabled");
            html! {}
        }
    };

    html! {
        <section id={SectionId::Testimonials.anchor()} class="relative py-24 bg-gradient-to-b from-white to-primary-50/30 dark:from-secondary-950 dark:to-primary-950/20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Trusted by Businesses Worldwide"
                    subtitle="Here's what our customers are saying about their experience with SoftSell"
                />

                <div class="hidden lg:grid grid-cols-2 gap-6">
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <TestimonialCard key={testimonial.name} testimonial={*testimonial} />
                    }) }
                </div>

                {mobile}

                <div class="mt-20 text-center">
                    <div class="inline-block bg-secondary-50 dark:bg-secondary-800/50 px-6 py-2 rounded-full text-secondary-700 dark:text-secondary-300 mb-4">
                        {"Ready to experience it yourself?"}
                    </div>
                    <div class="flex flex-col sm:flex-row justify-center gap-4">
                        <a href={format!("#{}", SectionId::Contact.anchor())} class="bg-primary-600 hover:bg-primary-700 text-white font-medium rounded-lg py-3 px-8 text-center">
                            {"Get Started Today"}
                        </a>
                        <a href="#" class="bg-white dark:bg-secondary-800 text-secondary-800 dark:text-white border border-secondary-200 dark:border-secondary-700 font-medium rounded-lg py-3 px-8 text-center">
                            {"Read Case Studies"}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
