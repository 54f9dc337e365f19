//! Runtime configuration read from BACKEND_* environment variables.

use std::time::Duration;

/// Retry budget for transactional room operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxnConfig {
    /// Maximum read-compute-commit attempts before a conflict surfaces.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub retry_interval: Duration,
}

impl Default for TxnConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            retry_interval: Duration::from_millis(25),
        }
    }
}

impl TxnConfig {
    /// Read `BACKEND_TXN_MAX_ATTEMPTS` and `BACKEND_TXN_RETRY_MS`, falling
    /// back to defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_attempts: env_u64("BACKEND_TXN_MAX_ATTEMPTS")
                .map(|v| v as u32)
                .unwrap_or(defaults.max_attempts),
            retry_interval: env_u64("BACKEND_TXN_RETRY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.retry_interval),
        }
    }
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok()?.trim().parse().ok()
}
