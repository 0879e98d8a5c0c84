//! Error types used by rpc-backoff.
//!
//! The delay calculation itself never fails. [`PolicyError`] is returned only by
//! the checked constructor [`RetryBackoff::try_new`](crate::RetryBackoff::try_new)
//! when a bound cannot produce a meaningful delay.
//!
//! Like other error enums in this style it provides `as_label` / `as_message`
//! helpers for logs and metrics.

use thiserror::Error;

/// # Errors produced when building a backoff policy from untrusted bounds.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PolicyError {
    /// A bound is `NaN` or infinite.
    #[error("{bound} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending bound (`base_ms` or `max_ms`).
        bound: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A bound is below zero.
    #[error("{bound} must not be negative, got {value}")]
    Negative {
        /// Name of the offending bound (`base_ms` or `max_ms`).
        bound: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl PolicyError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use rpc_backoff::PolicyError;
    ///
    /// let err = PolicyError::Negative { bound: "max_ms", value: -1.0 };
    /// assert_eq!(err.as_label(), "policy_negative_bound");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PolicyError::NonFinite { .. } => "policy_non_finite_bound",
            PolicyError::Negative { .. } => "policy_negative_bound",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            PolicyError::NonFinite { bound, value } => format!("non-finite {bound}: {value}"),
            PolicyError::Negative { bound, value } => format!("negative {bound}: {value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_bound() {
        let err = PolicyError::NonFinite {
            bound: "base_ms",
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "base_ms must be finite, got inf");
        assert_eq!(err.as_message(), "non-finite base_ms: inf");
    }

    #[test]
    fn test_negative_message() {
        let err = PolicyError::Negative {
            bound: "max_ms",
            value: -2.5,
        };
        assert_eq!(err.to_string(), "max_ms must not be negative, got -2.5");
        assert_eq!(err.as_message(), "negative max_ms: -2.5");
    }
}
