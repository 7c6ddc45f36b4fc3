use softsell_chat_ui::hooks::{spawn_after, use_cancellation_scope};
use softsell_core::content::CONTACT_DETAILS;
use softsell_core::{
    ContactField, ContactFormState, LicenseType, SectionId, SubmissionState, SubmitOutcome,
    TaskSlot, Timings,
};
use softsell_frontend_common::Spinner;
use std::rc::Rc;
use std::str::FromStr;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct ContactModel(ContactFormState);

enum ContactAction {
    Edit(ContactField, String),
    Submit,
    Complete,
    Cancel,
    Dismiss,
}

impl Reducible for ContactModel {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            ContactAction::Edit(field, value) => next.edit(field, value),
            ContactAction::Submit => {
                if next.submit() == SubmitOutcome::Busy {
                    tracing::debug!("submit ignored while sending");
                }
            }
            ContactAction::Complete => {
                if let Some(form) = next.complete() {
                    // Name, email and message stay out of the log
                    tracing::info!(
                        company = %form.company,
                        license_type = %form.license_type,
                        "contact form submitted"
                    );
                }
            }
            ContactAction::Cancel => next.cancel(),
            ContactAction::Dismiss => next.dismiss(),
        }

        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

/// `(name attribute, value)` of the form control that fired `event`
fn control_value<E: TargetCast>(event: &E) -> Option<(String, String)> {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| (select.name(), select.value()))
}

fn input_class(has_error: bool) -> Classes {
    let border = if has_error {
        "border-red-500"
    } else {
        "border-gray-300 dark:border-secondary-600"
    };
    classes!(
        "w-full",
        "px-4",
        "py-2",
        "border",
        "rounded-md",
        "focus:outline-none",
        "focus:ring-2",
        "focus:ring-primary-500",
        "bg-white",
        "dark:bg-secondary-700",
        "dark:text-white",
        border
    )
}

#[derive(Properties, Clone, PartialEq)]
struct FieldProps {
    field: ContactField,
    error: Option<AttrValue>,
    children: Children,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    html! {
        <div>
            <label for={props.field.as_str()} class="block text-sm font-medium text-secondary-700 dark:text-secondary-300 mb-1">
                {props.field.label()}{" "}<span class="text-red-500">{"*"}</span>
            </label>
            { props.children.clone() }
            if let Some(error) = &props.error {
                <p class="mt-1 text-sm text-red-500 dark:text-red-400">{error.clone()}</p>
            }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ContactProps {
    #[prop_or_default]
    pub timings: Timings,
}

/// Contact details and the validated, simulated-submit enquiry form
#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let model = use_reducer(ContactModel::default);
    let scope = use_cancellation_scope();
    let slot = use_mut_ref(TaskSlot::new);

    // Drive the simulated request and the success banner off the submission phase
    {
        let dispatcher = model.dispatcher();
        let timings = props.timings;
        use_effect_with(model.0.state, move |state| {
            let (delay_ms, on_elapsed, on_cancelled) = match state {
                SubmissionState::Submitting => {
                    (timings.submit_ms, ContactAction::Complete, ContactAction::Cancel)
                }
                SubmissionState::Submitted => {
                    (timings.success_banner_ms, ContactAction::Dismiss, ContactAction::Dismiss)
                }
                SubmissionState::Idle => {
                    slot.borrow_mut().cancel();
                    return;
                }
            };

            let (id, token) = slot.borrow_mut().replace(&scope);
            let finished = slot.clone();
            let elapsed = dispatcher.clone();
            spawn_after(
                delay_ms,
                token,
                move || {
                    finished.borrow_mut().finish(id);
                    elapsed.dispatch(on_elapsed);
                },
                move || dispatcher.dispatch(on_cancelled),
            );
        });
    }

    let on_change = {
        let dispatcher = model.dispatcher();
        Callback::from(move |event: Event| {
            let Some((name, value)) = control_value(&event) else {
                return;
            };
            match ContactField::from_str(&name) {
                Ok(field) => dispatcher.dispatch(ContactAction::Edit(field, value)),
                Err(err) => tracing::warn!(%err, "unrecognised form control"),
            }
        })
    };
    let on_input = on_change.reform(|event: InputEvent| Event::from(event));

    let on_submit = {
        let dispatcher = model.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(ContactAction::Submit);
        })
    };

    let state = &model.0;
    let error = |field: ContactField| state.error(field).map(|e| AttrValue::from(e.to_owned()));
    let submitting = state.is_submitting();

    let text_input = |field: ContactField, kind: &'static str, placeholder: &'static str| {
        html! {
            <Field {field} error={error(field)}>
                <input
                    type={kind}
                    id={field.as_str()}
                    name={field.as_str()}
                    value={state.form.get(field).to_string()}
                    oninput={on_input.clone()}
                    class={input_class(error(field).is_some())}
                    {placeholder}
                />
            </Field>
        }
    };

    html! {
        <section id={SectionId::Contact.anchor()} class="py-20 bg-gray-50 dark:bg-secondary-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="lg:grid lg:grid-cols-2 lg:gap-16">
                    <div class="mb-12 lg:mb-0">
                        <h2 class="text-3xl sm:text-4xl font-bold text-secondary-900 dark:text-white mb-6">
                            {"Get in Touch"}
                        </h2>
                        <p class="text-xl text-secondary-600 dark:text-secondary-300 mb-8">
                            {"Have questions about buying or selling software licenses? Our team is here to help you navigate the process."}
                        </p>
                        <ContactDetailsList />
                    </div>

                    <div class="bg-white dark:bg-secondary-800 shadow-xl rounded-xl p-8 border border-gray-100 dark:border-secondary-700">
                        <h3 class="text-2xl font-bold text-secondary-900 dark:text-white mb-6">
                            {"Send us a message"}
                        </h3>
                        if state.is_submitted() {
                            <div class="bg-green-50 dark:bg-green-900/30 p-4 rounded-lg border border-green-200 dark:border-green-800 text-green-700 dark:text-green-400" role="status">
                                <p class="font-medium">{"Thank you for your message!"}</p>
                                <p class="text-sm mt-1">{"We'll get back to you as soon as possible."}</p>
                            </div>
                        } else {
                            <form onsubmit={on_submit}>
                                <div class="space-y-4">
                                    { text_input(ContactField::Name, "text", "John Doe") }
                                    { text_input(ContactField::Email, "email", "john@example.com") }
                                    { text_input(ContactField::Company, "text", "Acme Inc.") }

                                    <Field field={ContactField::LicenseType} error={error(ContactField::LicenseType)}>
                                        <select
                                            id={ContactField::LicenseType.as_str()}
                                            name={ContactField::LicenseType.as_str()}
                                            onchange={on_change.clone()}
                                            class={input_class(error(ContactField::LicenseType).is_some())}
                                        >
                                            <option value="" selected={state.form.license_type.is_empty()}>
                                                {"Select a license type"}
                                            </option>
                                            { for LicenseType::ALL.into_iter().map(|license| html! {
                                                <option
                                                    key={license.value()}
                                                    value={license.value()}
                                                    selected={state.form.license_type == license.value()}
                                                >
                                                    {license.label()}
                                                </option>
                                            }) }
                                        </select>
                                    </Field>

                                    <Field field={ContactField::Message} error={error(ContactField::Message)}>
                                        <textarea
                                            id={ContactField::Message.as_str()}
                                            name={ContactField::Message.as_str()}
                                            rows="4"
                                            value={state.form.message.clone()}
                                            oninput={on_input.clone()}
                                            class={input_class(error(ContactField::Message).is_some())}
                                            placeholder="How can we help you?"
                                        />
                                    </Field>

                                    <div class="pt-2">
                                        <button
                                            type="submit"
                                            disabled={submitting}
                                            class="w-full bg-primary-600 hover:bg-primary-700 text-white py-3 px-4 rounded-lg font-medium text-lg shadow-md transition-colors disabled:opacity-70"
                                        >
                                            if submitting {
                                                <Spinner text={"Sending..."} />
                                            } else {
                                                {"Send Message"}
                                            }
                                        </button>
                                    </div>
                                </div>
                            </form>
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactDetailsList)]
fn contact_details_list() -> Html {
    let details = CONTACT_DETAILS;
    let item = |title: &'static str, icon: &'static str, body: Html| {
        html! {
            <div class="flex items-start">
                <div class="flex-shrink-0 mt-1">
                    <svg class="w-6 h-6 text-primary-500 dark:text-primary-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={icon} />
                    </svg>
                </div>
                <div class="ml-3">
                    <p class="text-sm font-medium text-secondary-900 dark:text-white">{title}</p>
                    {body}
                </div>
            </div>
        }
    };
    let link_class = "text-secondary-600 dark:text-secondary-400 hover:text-primary-600 dark:hover:text-primary-400";

    html! {
        <div class="space-y-6">
            { item(
                "Email",
                "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
                html! { <a href={format!("mailto:{}", details.email)} class={link_class}>{details.email}</a> },
            ) }
            { item(
                "Phone",
                "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z",
                html! { <a href={details.phone_href} class={link_class}>{details.phone_display}</a> },
            ) }
            { item(
                "Location",
                "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0zM15 11a3 3 0 11-6 0 3 3 0 016 0z",
                html! {
                    <p class="text-secondary-600 dark:text-secondary-400">
                        {details.address_lines[0]}<br />{details.address_lines[1]}
                    </p>
                },
            ) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn reduce_all(actions: Vec<ContactAction>) -> Rc<ContactModel> {
        actions
            .into_iter()
            .fold(Rc::new(ContactModel::default()), |model, action| model.reduce(action))
    }

    fn fill_valid() -> Vec<ContactAction> {
        vec![
            ContactAction::Edit(ContactField::Name, "Jane Doe".into()),
            ContactAction::Edit(ContactField::Email, "jane@example.com".into()),
            ContactAction::Edit(ContactField::Company, "Acme".into()),
            ContactAction::Edit(ContactField::LicenseType, "cloud".into()),
            ContactAction::Edit(ContactField::Message, "Selling seats".into()),
        ]
    }

    #[test]
    fn test_empty_submit_shows_every_error() {
        let model = reduce_all(vec![ContactAction::Submit]);
        assert_eq!(model.0.errors.len(), ContactField::ALL.len());
        assert_eq!(model.0.state, SubmissionState::Idle);
    }

    #[test]
    fn test_valid_submit_runs_to_banner_and_back() {
        let mut actions = fill_valid();
        actions.push(ContactAction::Submit);
        let model = reduce_all(actions);
        assert!(model.0.is_submitting());

        let model = model.reduce(ContactAction::Complete);
        assert!(model.0.is_submitted());
        assert_eq!(model.0.form.name, "");

        let model = model.reduce(ContactAction::Dismiss);
        assert_eq!(model.0.state, SubmissionState::Idle);
    }

    #[test]
    fn test_unchanged_state_keeps_same_rc() {
        let model = Rc::new(ContactModel::default());
        let next = model.clone().reduce(ContactAction::Dismiss);
        assert!(Rc::ptr_eq(&model, &next));
    }

    #[test]
    fn test_cancel_returns_to_idle_and_keeps_values() {
        let mut actions = fill_valid();
        actions.push(ContactAction::Submit);
        actions.push(ContactAction::Cancel);
        let model = reduce_all(actions);
        assert_eq!(model.0.state, SubmissionState::Idle);
        assert_eq!(model.0.form.company, "Acme");
    }

    #[test]
    fn test_submission_log_leaves_out_personal_details() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut actions = fill_valid();
            actions.push(ContactAction::Submit);
            actions.push(ContactAction::Complete);
            reduce_all(actions);
        });

        let output = captured.contents();
        assert!(output.contains("contact form submitted"));
        assert!(output.contains("company=Acme"));
        assert!(!output.contains("Jane"));
        assert!(!output.contains("jane@example.com"));
        assert!(!output.contains("Selling seats"));
    }
}
