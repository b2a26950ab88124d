use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable classification of a configuration failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorKind {
    #[serde(rename = "InvalidURL")]
    InvalidUrl,
    InvalidAppName,
    InvalidFirebaseConfig,
    InvalidProvider,
}

/// Display name for kinds missing from [`KIND_NAMES`].
const BASE_ERROR_NAME: &str = "BaseError";

/// Kind-to-name mapping. Kinds without an entry resolve to `BaseError`.
const KIND_NAMES: &[(ErrorKind, &str)] = &[
    (ErrorKind::InvalidUrl, "InvalidURLError"),
    (ErrorKind::InvalidAppName, "InvalidAppNameError"),
    (ErrorKind::InvalidFirebaseConfig, "InvalidFirebaseConfigError"),
    (ErrorKind::InvalidProvider, "InvalidProviderError"),
];

impl ErrorKind {
    /// Returns the display name derived from this kind.
    pub fn name(self) -> &'static str {
        KIND_NAMES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, name)| *name)
            .unwrap_or(BASE_ERROR_NAME)
    }
}

/// A configuration validation failure.
///
/// Carries a machine-readable [`ErrorKind`] and a human-readable message;
/// the display name is derived from the kind. The display form is
/// `[<name>] <message>.` with a single trailing period always appended.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{}] {}.", .kind.name(), .message)]
pub struct ConfigError {
    kind: ErrorKind,
    message: String,
}

impl ConfigError {
    /// Creates an error with an explicit kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The supplied URL is missing, unparsable, or not http/https.
    pub fn invalid_url() -> Self {
        Self::new(
            ErrorKind::InvalidUrl,
            "Invalid URL, the URL must be a valid http or https address",
        )
    }

    /// The embedded app name resolved to an empty string.
    pub fn invalid_app_name() -> Self {
        Self::new(
            ErrorKind::InvalidAppName,
            "Invalid app name, the app name must not be empty",
        )
    }

    /// The supplied firebase settings record carries no values.
    pub fn invalid_firebase_config() -> Self {
        Self::new(
            ErrorKind::InvalidFirebaseConfig,
            "Invalid firebase config, the firebase settings must contain at least one value",
        )
    }

    /// `name` is not a known authentication provider.
    pub fn invalid_provider(name: &str) -> Self {
        Self::new(
            ErrorKind::InvalidProvider,
            format!("Invalid provider, \"{name}\" is not a valid provider name"),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Display name derived from the kind.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Plain-record form for logging or cross-boundary transmission.
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord {
            kind: self.kind,
            name: self.name().to_string(),
            message: self.message.clone(),
        }
    }
}

/// Serialized form of a [`ConfigError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub kind: ErrorKind,
    pub name: String,
    pub message: String,
}

impl From<ErrorRecord> for ConfigError {
    fn from(record: ErrorRecord) -> Self {
        // The name is always re-derived from the kind.
        Self::new(record.kind, record.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_appends_trailing_period() {
        assert_eq!(
            ConfigError::invalid_url().to_string(),
            "[InvalidURLError] Invalid URL, the URL must be a valid http or https address."
        );
    }

    #[test]
    fn test_name_follows_kind() {
        assert_eq!(ConfigError::invalid_url().name(), "InvalidURLError");
        assert_eq!(ConfigError::invalid_app_name().name(), "InvalidAppNameError");
        assert_eq!(
            ConfigError::invalid_firebase_config().name(),
            "InvalidFirebaseConfigError"
        );
        assert_eq!(
            ConfigError::invalid_provider("x").name(),
            "InvalidProviderError"
        );
    }

    #[test]
    fn test_invalid_provider_message_template() {
        let err = ConfigError::invalid_provider("myspace");
        assert_eq!(
            err.message(),
            "Invalid provider, \"myspace\" is not a valid provider name"
        );
        assert_eq!(
            err.to_string(),
            "[InvalidProviderError] Invalid provider, \"myspace\" is not a valid provider name."
        );
    }

    #[test]
    fn test_record_round_trip() {
        let err = ConfigError::invalid_app_name();
        let json = serde_json::to_string(&err.to_record()).unwrap();
        let record: ErrorRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record.name, "InvalidAppNameError");
        assert_eq!(ConfigError::from(record), err);
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::InvalidUrl).unwrap(),
            "\"InvalidURL\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorKind::InvalidFirebaseConfig).unwrap(),
            "\"InvalidFirebaseConfig\""
        );
    }
}
