use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Centered title and optional lead paragraph opening each page section
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="text-center max-w-3xl mx-auto mb-16">
            <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                {props.title.clone()}
            </h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="text-lg text-gray-600 dark:text-gray-300">{subtitle.clone()}</p>
            }
        </div>
    }
}
