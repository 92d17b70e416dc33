//! Retry and backoff utilities for image downloads.
//!
//! Transient network failures are retried on the same URL with exponential
//! backoff. Anything else moves on to the next candidate URL.

use std::time::Duration;

use super::error::AcquireError;

/// Default number of retry attempts for transient network errors.
pub const DEFAULT_NETWORK_RETRIES: u32 = 3;

/// Base delay for exponential backoff (1 second).
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

/// Maximum delay cap for exponential backoff (30 seconds).
pub const DEFAULT_BACKOFF_MAX: Duration = Duration::from_secs(30);

/// HTTP statuses that usually clear up on their own.
const TRANSIENT_STATUSES: &[u16] = &[502, 503, 504];

/// Determine if a reqwest error is a transient network error that should be retried.
pub fn is_transient_network_error(error: &reqwest::Error) -> bool {
    if error.is_connect() || error.is_timeout() || error.is_body() {
        return true;
    }

    error
        .status()
        .map(|status| TRANSIENT_STATUSES.contains(&status.as_u16()))
        .unwrap_or(false)
}

/// Whether a failed fetch is worth repeating on the same URL.
pub fn is_transient(error: &AcquireError) -> bool {
    match error {
        AcquireError::Http(e) => is_transient_network_error(e),
        AcquireError::Status { status, .. } => TRANSIENT_STATUSES.contains(status),
        _ => false,
    }
}

/// Calculate exponential backoff delay with jitter.
///
/// Uses the formula: min(base * 2^attempt + jitter, max_delay)
/// where jitter is half the base, capped at 500ms.
pub fn calculate_backoff(attempt: u32, base: Duration, max: Duration) -> Duration {
    let exponential = base.saturating_mul(2u32.saturating_pow(attempt));
    let jitter_ms = (base.as_millis() as u64).min(1000);
    let jitter = Duration::from_millis(jitter_ms / 2);
    exponential.saturating_add(jitter).min(max)
}
