//! # Capped exponential backoff for RPC retries.
//!
//! The delay before retry number `attempt` (0-indexed) is
//! `floor(base_ms × 2^attempt)`, clamped to `floor(max_ms)`.
//!
//! - [`compute_retry_delay_ms`] the bare calculation with explicit bounds;
//! - [`retry_delay_ms`] the same with [`DEFAULT_BASE_MS`] / [`DEFAULT_MAX_MS`];
//! - [`RetryBackoff`] the bounds bundled as a reusable policy value.
//!
//! Nothing here fails. A negative, `NaN` or `-inf` attempt is treated as attempt 0,
//! and growth that overflows to infinity saturates at the cap.
//!
//! # Example
//! ```rust
//! use rpc_backoff::{retry_delay_ms, RetryBackoff};
//!
//! // Attempt 0 uses the base delay (250ms).
//! assert_eq!(retry_delay_ms(0.0), 250);
//!
//! // Attempt 3 = 250ms × 2^3 = 2000ms.
//! assert_eq!(retry_delay_ms(3.0), 2000);
//!
//! // Attempt 5 = 8000ms → capped at max=5000ms.
//! assert_eq!(retry_delay_ms(5.0), 5000);
//!
//! let policy = RetryBackoff::new(100.0, 1_000.0);
//! assert_eq!(policy.delay_ms(10.0), 1_000);
//! ```

use std::time::Duration;

use crate::error::PolicyError;

/// Delay used for attempt 0 when no base is given.
pub const DEFAULT_BASE_MS: f64 = 250.0;

/// Upper bound on any delay when no cap is given.
pub const DEFAULT_MAX_MS: f64 = 5000.0;

/// Computes the retry delay in whole milliseconds for the given attempt.
///
/// The raw delay is `base_ms × 2^attempt`. If it is not finite or exceeds `max_ms`,
/// `floor(max_ms)` is returned, otherwise `floor(raw)`.
///
/// # Notes
/// - `attempt` is normalized with `max(0, attempt)`; `NaN` counts as 0.
/// - `max_ms < base_ms` is accepted: every attempt then returns `floor(max_ms)`.
/// - The conversion to `u64` saturates, so the result is never negative.
///
/// # Example
/// ```rust
/// use rpc_backoff::compute_retry_delay_ms;
///
/// assert_eq!(compute_retry_delay_ms(1.0, 100.0, 10_000.0), 200);
/// assert_eq!(compute_retry_delay_ms(-7.0, 100.0, 10_000.0), 100);
/// assert_eq!(compute_retry_delay_ms(f64::INFINITY, 100.0, 10_000.0), 10_000);
/// ```
pub fn compute_retry_delay_ms(attempt: f64, base_ms: f64, max_ms: f64) -> u64 {
    let raw = raw_delay_ms(attempt, base_ms);
    if exceeds_cap(raw, max_ms) {
        return max_ms.floor() as u64;
    }
    raw.floor() as u64
}

/// [`compute_retry_delay_ms`] with `base_ms = 250` and `max_ms = 5000`.
#[inline]
pub fn retry_delay_ms(attempt: f64) -> u64 {
    compute_retry_delay_ms(attempt, DEFAULT_BASE_MS, DEFAULT_MAX_MS)
}

// f64::max returns the non-NaN operand, so NaN and -inf both land on 0.
fn raw_delay_ms(attempt: f64, base_ms: f64) -> f64 {
    let safe_attempt = attempt.max(0.0);
    base_ms * safe_attempt.exp2()
}

#[inline]
fn exceeds_cap(raw: f64, max_ms: f64) -> bool {
    !raw.is_finite() || raw > max_ms
}

/// Retry backoff bounds.
///
/// Bundles the two knobs of [`compute_retry_delay_ms`]:
/// - [`RetryBackoff::base_ms`] — delay for attempt 0;
/// - [`RetryBackoff::max_ms`] — cap no delay may exceed.
///
/// Fields are public and unchecked. Use [`RetryBackoff::try_new`] when the
/// bounds come from outside the program.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryBackoff {
    /// Delay before the first retry, in milliseconds.
    pub base_ms: f64,
    /// Maximum delay, in milliseconds.
    pub max_ms: f64,
}

impl Default for RetryBackoff {
    /// Returns a policy with:
    /// - `base_ms = 250`;
    /// - `max_ms = 5000`.
    fn default() -> Self {
        Self {
            base_ms: DEFAULT_BASE_MS,
            max_ms: DEFAULT_MAX_MS,
        }
    }
}

impl RetryBackoff {
    /// Creates a policy without validating the bounds.
    pub fn new(base_ms: f64, max_ms: f64) -> Self {
        Self { base_ms, max_ms }
    }

    /// Creates a policy, rejecting bounds that are `NaN`, infinite or negative.
    ///
    /// `max_ms < base_ms` is allowed; such a policy always returns `floor(max_ms)`.
    ///
    /// # Example
    /// ```rust
    /// use rpc_backoff::RetryBackoff;
    ///
    /// assert!(RetryBackoff::try_new(250.0, 5000.0).is_ok());
    /// assert!(RetryBackoff::try_new(f64::NAN, 5000.0).is_err());
    /// assert!(RetryBackoff::try_new(250.0, -1.0).is_err());
    /// ```
    pub fn try_new(base_ms: f64, max_ms: f64) -> Result<Self, PolicyError> {
        check_bound("base_ms", base_ms)?;
        check_bound("max_ms", max_ms)?;
        Ok(Self::new(base_ms, max_ms))
    }

    /// Creates a policy from [`Duration`] bounds.
    ///
    /// Sub-millisecond precision is kept as a fraction and floored only on output.
    pub fn from_durations(base: Duration, max: Duration) -> Self {
        Self::new(base.as_secs_f64() * 1000.0, max.as_secs_f64() * 1000.0)
    }

    /// Returns the delay for the given attempt in whole milliseconds.
    #[inline]
    pub fn delay_ms(&self, attempt: f64) -> u64 {
        compute_retry_delay_ms(attempt, self.base_ms, self.max_ms)
    }

    /// Returns the delay for the given attempt as a [`Duration`].
    pub fn delay(&self, attempt: f64) -> Duration {
        let delay_ms = self.delay_ms(attempt);
        tracing::trace!(
            attempt,
            delay_ms,
            capped = self.is_capped(attempt),
            "computed retry delay"
        );
        Duration::from_millis(delay_ms)
    }

    /// Returns `true` once the attempt has reached the cap.
    ///
    /// From that attempt on every delay equals `floor(max_ms)`.
    pub fn is_capped(&self, attempt: f64) -> bool {
        exceeds_cap(raw_delay_ms(attempt, self.base_ms), self.max_ms)
    }
}

fn check_bound(bound: &'static str, value: f64) -> Result<(), PolicyError> {
    if !value.is_finite() {
        return Err(PolicyError::NonFinite { bound, value });
    }
    if value < 0.0 {
        return Err(PolicyError::Negative { bound, value });
    }
    Ok(())
}
