//! Contact form model, validation and submission state

use crate::error::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

/// Whether `email` has the `<x>@<y>.<z>` shape the form accepts
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Email,
    Company,
    LicenseType,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Company,
        Self::LicenseType,
        Self::Message,
    ];

    /// Value of the `name`/`id` attribute on the form control
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::LicenseType => "licenseType",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Company => "Company",
            Self::LicenseType => "License Type",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::unknown_field(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseType {
    Enterprise,
    Productivity,
    Security,
    Cloud,
    Other,
}

impl LicenseType {
    pub const ALL: [Self; 5] = [
        Self::Enterprise,
        Self::Productivity,
        Self::Security,
        Self::Cloud,
        Self::Other,
    ];

    /// Value of the `<option>` element
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Enterprise => "enterprise",
            Self::Productivity => "productivity",
            Self::Security => "security",
            Self::Cloud => "cloud",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Enterprise => "Enterprise Software",
            Self::Productivity => "Productivity Suite",
            Self::Security => "Security Solutions",
            Self::Cloud => "Cloud Services",
            Self::Other => "Other",
        }
    }
}

impl FromStr for LicenseType {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|license| license.value() == s)
            .ok_or_else(|| CoreError::unknown_license_type(s))
    }
}

/// Field-level validation messages; empty means the form is valid
pub type ContactFormErrors = BTreeMap<ContactField, String>;

/// Raw form values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    /// Empty until an option is picked
    pub license_type: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::LicenseType => &self.license_type,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::LicenseType => self.license_type = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Check all five fields independently.
    #[must_use]
    pub fn validate(&self) -> ContactFormErrors {
        let mut errors = ContactFormErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, "Name is required".to_string());
        }

        if self.email.trim().is_empty() {
            errors.insert(ContactField::Email, "Email is required".to_string());
        } else if !is_valid_email(&self.email) {
            errors.insert(ContactField::Email, "Email is invalid".to_string());
        }

        if self.company.trim().is_empty() {
            errors.insert(ContactField::Company, "Company name is required".to_string());
        }

        if self.license_type.parse::<LicenseType>().is_err() {
            errors.insert(
                ContactField::LicenseType,
                "Please select a license type".to_string(),
            );
        }

        if self.message.trim().is_empty() {
            errors.insert(ContactField::Message, "Message is required".to_string());
        }

        errors
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Outcome of pressing the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the simulated request is now in flight
    Started,
    /// Validation failed; errors are set on the form
    Invalid,
    /// A submission is already in flight
    Busy,
}

/// Form values, errors and submission phase behind the contact section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: ContactFormErrors,
    pub state: SubmissionState,
}

impl ContactFormState {
    /// Update one field and clear its error
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.remove(&field);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state == SubmissionState::Submitting {
            return SubmitOutcome::Busy;
        }

        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "contact form rejected");
            return SubmitOutcome::Invalid;
        }

        self.state = SubmissionState::Submitting;
        SubmitOutcome::Started
    }

    /// Finish the simulated request: hand back the submitted values and reset the form
    pub fn complete(&mut self) -> Option<ContactForm> {
        if self.state != SubmissionState::Submitting {
            return None;
        }
        self.state = SubmissionState::Submitted;
        Some(std::mem::take(&mut self.form))
    }

    /// Hide the success banner so the form can be reused
    pub fn dismiss(&mut self) {
        if self.state == SubmissionState::Submitted {
            self.state = SubmissionState::Idle;
        }
    }

    /// Back out of an in-flight submission whose task was cancelled
    pub fn cancel(&mut self) {
        if self.state == SubmissionState::Submitting {
            self.state = SubmissionState::Idle;
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    #[must_use]
    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            company: "Acme Inc.".to_string(),
            license_type: "enterprise".to_string(),
            message: "We have 40 spare seats.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_empty_form_flags_every_field() {
        let errors = ContactForm::default().validate();
        for field in ContactField::ALL {
            assert!(errors.contains_key(&field), "missing error for {field}");
        }
        assert_eq!(errors[&ContactField::Email], "Email is required");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        let errors = form.validate();
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![ContactField::Name]);
    }

    #[test]
    fn test_missing_company_and_message_only() {
        let mut form = valid_form();
        form.company.clear();
        form.message.clear();
        let errors = form.validate();
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![ContactField::Company, ContactField::Message]
        );
        assert_eq!(errors[&ContactField::Company], "Company name is required");
    }

    #[test]
    fn test_email_format() {
        for bad in ["a@b", "foo", "a b@c.d", "@.", "a@b."] {
            let mut form = valid_form();
            form.email = bad.to_string();
            assert_eq!(
                form.validate().get(&ContactField::Email).map(String::as_str),
                Some("Email is invalid"),
                "{bad} should be rejected"
            );
        }

        for good in ["a@b.com", "first.last@sub.example.org"] {
            assert!(is_valid_email(good), "{good} should be accepted");
        }
    }

    #[test]
    fn test_license_type_must_be_known() {
        let mut form = valid_form();
        form.license_type = "gold".to_string();
        assert!(form.validate().contains_key(&ContactField::LicenseType));

        for license in LicenseType::ALL {
            form.license_type = license.value().to_string();
            assert!(form.validate().is_empty());
        }
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("licenseType".parse::<ContactField>().unwrap(), ContactField::LicenseType);
        assert!(matches!(
            "phone".parse::<ContactField>(),
            Err(CoreError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_edit_clears_only_that_error() {
        let mut state = ContactFormState::default();
        assert_eq!(state.submit(), SubmitOutcome::Invalid);
        assert_eq!(state.errors.len(), 5);

        state.edit(ContactField::Name, "J");
        assert!(state.error(ContactField::Name).is_none());
        assert_eq!(state.errors.len(), 4);
        assert_eq!(state.form.name, "J");
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut state = ContactFormState {
            form: valid_form(),
            ..ContactFormState::default()
        };

        assert_eq!(state.submit(), SubmitOutcome::Started);
        assert!(state.is_submitting());
        assert_eq!(state.submit(), SubmitOutcome::Busy);

        let submitted = state.complete().unwrap();
        assert_eq!(submitted, valid_form());
        assert!(state.is_submitted());
        assert_eq!(state.form, ContactForm::default());

        state.dismiss();
        assert_eq!(state.state, SubmissionState::Idle);
    }

    #[test]
    fn test_complete_without_submit_is_ignored() {
        let mut state = ContactFormState::default();
        assert!(state.complete().is_none());
        assert_eq!(state.state, SubmissionState::Idle);
    }

    #[test]
    fn test_cancel_returns_to_idle_and_keeps_values() {
        let mut state = ContactFormState {
            form: valid_form(),
            ..ContactFormState::default()
        };
        state.submit();
        state.cancel();
        assert_eq!(state.state, SubmissionState::Idle);
        assert_eq!(state.form, valid_form());
    }
}
