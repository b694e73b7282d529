//! Sequencer configuration.

use serde::Deserialize;

pub use shared_types::{EvmAddress, TxKey};

/// Sequencer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Maximum number of taken slots a single next-nonce scan steps over.
    pub max_scan_steps: u64,
    /// Maximum in-flight pending records per account.
    pub max_pending_per_account: usize,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            max_scan_steps: 10_000,
            max_pending_per_account: 4_096,
        }
    }
}

impl SequencerConfig {
    /// Creates a config for testing with small limits.
    pub fn for_testing() -> Self {
        Self {
            max_scan_steps: 64,
            max_pending_per_account: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = SequencerConfig::default();
        assert_eq!(config.max_scan_steps, 10_000);
        assert_eq!(config.max_pending_per_account, 4_096);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: SequencerConfig =
            serde_json::from_str(r#"{"max_scan_steps": 5}"#).unwrap();
        assert_eq!(config.max_scan_steps, 5);
        assert_eq!(config.max_pending_per_account, 4_096);
    }
}
