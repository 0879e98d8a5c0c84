//! # rpc-backoff
//!
//! **rpc-backoff** computes how long to wait before retrying a remote call.
//!
//! The delay grows exponentially from a base and plateaus at a cap:
//!
//! ```text
//!  attempt:   0      1      2       3       4       5      6  ...
//!  delay:   250ms  500ms  1000ms  2000ms  4000ms  5000ms  5000ms
//!           └──────── base × 2^attempt ────────┘  └── max ──────
//! ```
//!
//! The calculation is pure and never fails: bad attempts (negative, `NaN`, `-inf`)
//! count as attempt 0, and overflow saturates at the cap. Scheduling the retry,
//! counting attempts and adding jitter are left to the caller.
//!
//! ## Features
//! | Area              | Description                                        | Key items                                       |
//! |-------------------|----------------------------------------------------|-------------------------------------------------|
//! | **Calculation**   | Delay for one attempt, explicit or default bounds. | [`compute_retry_delay_ms`], [`retry_delay_ms`]  |
//! | **Configuration** | Bounds bundled as a `Copy` policy value.           | [`RetryBackoff`]                                |
//! | **Errors**        | Checked construction from untrusted bounds.        | [`PolicyError`]                                 |
//!
//! ## Logging
//! [`RetryBackoff::delay`] emits a `tracing` trace event per computed delay.
//! The crate never installs a subscriber.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use rpc_backoff::{compute_retry_delay_ms, RetryBackoff};
//!
//! assert_eq!(compute_retry_delay_ms(2.0, 250.0, 5000.0), 1000);
//!
//! let policy = RetryBackoff::try_new(100.0, 1_000.0)?;
//! for attempt in 0..3u32 {
//!     let wait = policy.delay(f64::from(attempt));
//!     assert!(wait <= Duration::from_secs(1));
//! }
//! # Ok::<(), rpc_backoff::PolicyError>(())
//! ```
mod error;
mod policies;

// ---- Public re-exports ----

pub use error::PolicyError;
pub use policies::{
    compute_retry_delay_ms, retry_delay_ms, RetryBackoff, DEFAULT_BASE_MS, DEFAULT_MAX_MS,
};
