//! Time limits for record store calls.

use crate::board::ports::{RecordStoreError, RecordStoreResult};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Timeout applied when none is configured.
const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Limits applied to every record store call made by a service.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use taskboard::board::services::CallPolicy;
///
/// assert_eq!(CallPolicy::default().timeout, Duration::from_secs(30));
/// assert_eq!(
///     CallPolicy::with_timeout(Duration::from_millis(250)).timeout,
///     Duration::from_millis(250)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallPolicy {
    /// Longest a single call may take before it counts as failed.
    pub timeout: Duration,
}

impl Default for CallPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }
}

impl CallPolicy {
    /// Creates a policy with the given timeout.
    #[must_use]
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

/// Failure of a bounded record store call.
#[derive(Debug, Clone, Error)]
pub enum StoreCallError {
    /// The store reported an error.
    #[error(transparent)]
    Store(#[from] RecordStoreError),

    /// The store did not answer in time.
    #[error("{operation} timed out after {after:?}")]
    TimedOut {
        /// Store operation name.
        operation: &'static str,
        /// Timeout that elapsed.
        after: Duration,
    },
}

/// Runs `call` under the policy's timeout.
pub(super) async fn within<T>(
    policy: CallPolicy,
    operation: &'static str,
    call: impl Future<Output = RecordStoreResult<T>>,
) -> Result<T, StoreCallError> {
    match tokio::time::timeout(policy.timeout, call).await {
        Ok(result) => Ok(result?),
        Err(_) => {
            warn!(operation, timeout = ?policy.timeout, "record store call timed out");
            Err(StoreCallError::TimedOut {
                operation,
                after: policy.timeout,
            })
        }
    }
}
