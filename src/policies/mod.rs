//! Retry delay policies.
//!
//! ## Contents
//! - [`compute_retry_delay_ms`] capped exponential delay for one attempt
//! - [`retry_delay_ms`]         the same with default bounds
//! - [`RetryBackoff`]           base / max bounds as a reusable value
//!
//! ## Defaults
//! - [`DEFAULT_BASE_MS`] = 250ms
//! - [`DEFAULT_MAX_MS`]  = 5000ms

mod backoff;

pub use backoff::{
    compute_retry_delay_ms, retry_delay_ms, RetryBackoff, DEFAULT_BASE_MS, DEFAULT_MAX_MS,
};
