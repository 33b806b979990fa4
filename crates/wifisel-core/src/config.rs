//! Registry Configuration
//!
//! Tunables for the candidate registry, with presets for fail-fast and test use.

use serde::{Deserialize, Serialize};

use crate::{Result, WifiselError};

/// Configuration for a `WifiCandidates` registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Raise faults as errors instead of recording them
    pub picky: bool,
    /// Capacity hint for per-network groups (BSSIDs per network)
    pub expected_bssids_per_network: usize,
    /// Emit a log record for every captured fault
    pub log_faults: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            picky: false,                   // Batches keep going past bad scan results
            expected_bssids_per_network: 2, // Typical home/office deployment
            log_faults: true,
        }
    }
}

impl RegistryConfig {
    /// Create a configuration that fails fast on every fault
    pub fn picky() -> Self {
        Self {
            picky: true,
            ..Self::default()
        }
    }

    /// Create a configuration for tests: picky, quiet
    pub fn testing() -> Self {
        Self {
            picky: true,
            expected_bssids_per_network: 2,
            log_faults: false,
        }
    }

    /// Check the configuration for values the registry cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.expected_bssids_per_network == 0 {
            return Err(WifiselError::config_error(
                "expected_bssids_per_network must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(!RegistryConfig::default().picky);
        assert!(RegistryConfig::picky().picky);
        assert!(RegistryConfig::picky().log_faults);
        assert!(!RegistryConfig::testing().log_faults);
        assert!(RegistryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_group_capacity_rejected() {
        let config = RegistryConfig {
            expected_bssids_per_network: 0,
            ..RegistryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WifiselError::Configuration { .. })
        ));
    }
}
