//! Common error handling utilities and conventions

/// Extension trait for adding context to errors consistently across crates
pub trait ErrorContext<T> {
    /// Add operation context to an error result
    fn with_context<F>(self, f: F) -> Result<T, String>
    where
        F: FnOnce() -> String;

    /// Add operation context with a static string
    fn with_context_str(self, context: &'static str) -> Result<T, String>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<F>(self, f: F) -> Result<T, String>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| format!("{}: {}", f(), err))
    }

    fn with_context_str(self, context: &'static str) -> Result<T, String> {
        self.with_context(|| context.to_string())
    }
}

/// Standard result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised at the edges where DOM strings or persisted values enter the core
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown license type: {value}")]
    UnknownLicenseType { value: String },

    #[error("Unknown contact form field: {name}")]
    UnknownField { name: String },

    #[error("Unknown page section: {anchor}")]
    UnknownSection { anchor: String },

    #[error("Section not found in document: {anchor}")]
    SectionNotFound { anchor: String },

    #[error("Invalid carousel: {message}")]
    InvalidCarousel { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl CoreError {
    /// Create an unknown license type error
    pub fn unknown_license_type(value: impl Into<String>) -> Self {
        Self::UnknownLicenseType {
            value: value.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create an unknown section error
    pub fn unknown_section(anchor: impl Into<String>) -> Self {
        Self::UnknownSection {
            anchor: anchor.into(),
        }
    }

    /// Create a missing section error
    pub fn section_not_found(anchor: impl Into<String>) -> Self {
        Self::SectionNotFound {
            anchor: anchor.into(),
        }
    }

    /// Create an invalid carousel error
    pub fn invalid_carousel(message: impl Into<String>) -> Self {
        Self::InvalidCarousel {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization_error(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_error(err.to_string())
    }
}
