//! Error types for quicksort-config

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving a configuration document.
///
/// Every variant is fatal to the resolution pass: no partial
/// [`Configuration`](crate::Configuration) is ever produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Configuration is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Encoding { valid_up_to: usize },

    #[error("Failed to parse configuration at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Chest profile {profile_index}: {field} is required")]
    MissingRequiredField {
        profile_index: usize,
        field: &'static str,
    },

    #[error("Malformed sorting group token '{token}': {reason}")]
    MalformedToken { token: String, reason: String },

    #[error("Invalid logLevel {name}")]
    InvalidSeverity { name: String },

    #[error("Chest profile {profile_index}: invalid identifier '{value}' in {field}")]
    InvalidIdentifier {
        profile_index: usize,
        field: &'static str,
        value: String,
    },

    #[error("Bundled default configuration declares no chest profiles")]
    EmptyBundledConfig,
}

impl Error {
    pub(crate) fn malformed(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedToken {
            token: token.into(),
            reason: reason.into(),
        }
    }
}
