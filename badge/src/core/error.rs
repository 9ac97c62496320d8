//! Error types for bundle validation and configuration.

use thiserror::Error;

/// Errors raised before any markup is produced.
///
/// Every variant aborts the render; no partial badge is emitted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BadgeError {
    /// A field is present but violates its type or range contract.
    #[error("Invalid metric `{field}`: {reason}")]
    InvalidMetric {
        /// Name of the offending bundle field (camelCase, as on the wire)
        field: String,
        /// What is wrong with the value
        reason: String,
    },

    /// A required field is missing from the bundle.
    #[error("Malformed bundle: missing required field `{field}`")]
    MalformedBundle {
        /// Name of the missing field
        field: String,
    },

    /// A render configuration value is out of range.
    #[error("Invalid render config `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending config field
        field: String,
        /// What is wrong with the value
        reason: String,
    },
}

impl BadgeError {
    /// Create an InvalidMetric error.
    pub fn invalid_metric(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMetric {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a MalformedBundle error.
    pub fn malformed(field: impl Into<String>) -> Self {
        Self::MalformedBundle {
            field: field.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
