use thiserror::Error;

/// Result alias for resolution operations
pub type Result<T> = std::result::Result<T, LookupError>;

/// Errors that abort a resolution.
///
/// Configuration problems and fatal store replies both land here; a missing
/// secret is never an error (see [`crate::Resolution`]).
#[derive(Debug, Error)]
pub enum LookupError {
    /// Malformed lookup options (wrong type for a known option)
    #[error("{message}")]
    Configuration { message: String },

    /// A `confine_to_keys` or `strip_from_keys` pattern failed to compile
    #[error("Failed to create regexp with error {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The store rejected our credentials for this secret
    #[error("Skipping backend. No permission to access {key}")]
    AccessDenied { key: String },

    /// The store failed for any other reason (throttling, connectivity, server fault)
    #[error("Skipping backend. Failed to lookup {key} due to {detail}")]
    Service { key: String, detail: String },
}

impl LookupError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a pattern-compilation error
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an access-denied error for a candidate key
    pub fn access_denied(key: impl Into<String>) -> Self {
        Self::AccessDenied { key: key.into() }
    }

    /// Create a service-failure error for a candidate key
    pub fn service(key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Service {
            key: key.into(),
            detail: detail.into(),
        }
    }

    /// True when the error is caused by the option bag rather than the remote store
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::Pattern { .. })
    }
}
