//! Logical network identity
//!
//! A `MatchInfo` is the (SSID, security class) pair that lets a saved network
//! configuration and an over-the-air scan result be recognized as the same network.
//! Both sides are derived independently; the registry insists they agree.

use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::scan::{NetworkConfig, ScanResult};

// ----------------------------------------------------------------------------
// Security Class
// ----------------------------------------------------------------------------

/// Coarse security type used for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SecurityClass {
    Open,
    Owe,
    Wep,
    Psk,
    Sae,
    Eap,
    EapSuiteB,
}

impl SecurityClass {
    /// Derive the security class an access point advertises in its capabilities string,
    /// e.g. `[WPA2-PSK-CCMP][RSN-PSK+SAE-CCMP][ESS]`
    ///
    /// Transition-mode access points report their legacy class so that existing
    /// PSK and open configurations keep matching them.
    pub fn from_capabilities(capabilities: &str) -> Self {
        let flags = CapabilityFlags::parse(capabilities);

        if flags.suite_b {
            SecurityClass::EapSuiteB
        } else if flags.eap {
            SecurityClass::Eap
        } else if flags.sae && flags.psk {
            SecurityClass::Psk
        } else if flags.sae {
            SecurityClass::Sae
        } else if flags.psk {
            SecurityClass::Psk
        } else if flags.wep {
            SecurityClass::Wep
        } else if flags.owe && !flags.owe_transition {
            SecurityClass::Owe
        } else {
            SecurityClass::Open
        }
    }
}

impl fmt::Display for SecurityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityClass::Open => write!(f, "OPEN"),
            SecurityClass::Owe => write!(f, "OWE"),
            SecurityClass::Wep => write!(f, "WEP"),
            SecurityClass::Psk => write!(f, "PSK"),
            SecurityClass::Sae => write!(f, "SAE"),
            SecurityClass::Eap => write!(f, "EAP"),
            SecurityClass::EapSuiteB => write!(f, "EAP_SUITE_B"),
        }
    }
}

/// Key management tokens found in a capabilities string
#[derive(Debug, Default)]
struct CapabilityFlags {
    psk: bool,
    sae: bool,
    eap: bool,
    suite_b: bool,
    wep: bool,
    owe: bool,
    owe_transition: bool,
}

impl CapabilityFlags {
    fn parse(capabilities: &str) -> Self {
        let mut flags = Self::default();
        for element in capabilities
            .split(|c| c == '[' || c == ']')
            .filter(|e| !e.is_empty())
        {
            if element.eq_ignore_ascii_case("WEP") {
                flags.wep = true;
                continue;
            }
            if element.eq_ignore_ascii_case("OWE_TRANSITION") {
                flags.owe_transition = true;
                continue;
            }
            for token in element.split(|c| c == '-' || c == '+') {
                let token = token.to_ascii_uppercase();
                // `FT/PSK`, `EAP/SHA1`, `PSK/SHA256`: the AKM name precedes any hash suffix
                let akm = token.strip_prefix("FT/").unwrap_or(&token);
                match akm.split('/').next().unwrap_or(akm) {
                    "PSK" => flags.psk = true,
                    "SAE" => flags.sae = true,
                    "EAP" => flags.eap = true,
                    "EAP_SUITE_B_192" => flags.suite_b = true,
                    "OWE" => flags.owe = true,
                    _ => {}
                }
            }
        }
        flags
    }
}

// ----------------------------------------------------------------------------
// Match Info
// ----------------------------------------------------------------------------

/// Canonical (SSID, security class) descriptor of a logical network
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchInfo {
    pub ssid: String,
    pub security: SecurityClass,
}

impl MatchInfo {
    /// Create a new match descriptor
    pub fn new<S: Into<String>>(ssid: S, security: SecurityClass) -> Self {
        Self {
            ssid: ssid.into(),
            security,
        }
    }

    /// Derive the descriptor of a saved configuration
    pub fn from_config(config: &NetworkConfig) -> Self {
        Self::new(config.ssid.clone(), config.security)
    }

    /// Derive the descriptor of an observed access point
    pub fn from_scan_result(scan_result: &ScanResult) -> Self {
        Self::new(
            scan_result.ssid.clone(),
            SecurityClass::from_capabilities(&scan_result.capabilities),
        )
    }
}

impl fmt::Display for MatchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"/{}", self.ssid, self.security)
    }
}
