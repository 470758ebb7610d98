//! Error types for page enhancement.

use thiserror::Error;

/// Primary error type for widget synthesis and behavior wiring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnhanceError {
    /// The global `window` object is unavailable.
    #[error("window unavailable")]
    MissingWindow,
    /// The window has no attached document.
    #[error("document unavailable")]
    MissingDocument,
    /// A DOM call failed.
    #[error("dom operation failed: {operation}")]
    Dom {
        /// Name of the failing DOM call.
        operation: &'static str,
        /// Debug rendering of the thrown value.
        detail: String,
    },
    /// A configuration field held an unusable value.
    #[error("invalid configuration field {field}: {reason}")]
    InvalidConfig {
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// The embedded configuration document was not valid JSON.
    #[error("configuration parse failed: {detail}")]
    ConfigParse {
        /// Parser error message.
        detail: String,
    },
}

impl EnhanceError {
    /// Build a [`EnhanceError::Dom`] from any debuggable thrown value.
    #[must_use]
    pub fn dom(operation: &'static str, detail: impl std::fmt::Debug) -> Self {
        Self::Dom {
            operation,
            detail: format!("{detail:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EnhanceError;

    #[test]
    fn dom_error_renders_operation() {
        let err = EnhanceError::dom("createElement", "boom");
        assert_eq!(err.to_string(), "dom operation failed: createElement");
        assert_eq!(
            err,
            EnhanceError::Dom {
                operation: "createElement",
                detail: "\"boom\"".to_string(),
            }
        );
    }

    #[test]
    fn config_errors_name_the_field() {
        let err = EnhanceError::InvalidConfig {
            field: "reveal.threshold",
            reason: "out_of_range",
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration field reveal.threshold: out_of_range"
        );
    }
}
