//! Scan observations and saved network configurations
//!
//! These are the already-parsed records the registry consumes. Scanning itself and
//! configuration persistence happen elsewhere.

use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::match_info::SecurityClass;
use crate::types::{NetworkId, Timestamp};

// ----------------------------------------------------------------------------
// Scan Result
// ----------------------------------------------------------------------------

/// One access point as reported by a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Network name
    pub ssid: String,
    /// BSSID as reported by the driver; validated when the result is nominated
    pub bssid: String,
    /// Capabilities string, e.g. `[WPA2-PSK-CCMP][ESS]`
    pub capabilities: String,
    /// Signal level in dBm
    pub level: i32,
    /// Primary channel frequency in MHz
    pub frequency: u32,
    /// Time the access point was last seen, microseconds since boot
    pub timestamp_us: u64,
}

impl ScanResult {
    /// Create a scan result
    pub fn new<S, B, C>(ssid: S, bssid: B, capabilities: C, level: i32, frequency: u32) -> Self
    where
        S: Into<String>,
        B: Into<String>,
        C: Into<String>,
    {
        Self {
            ssid: ssid.into(),
            bssid: bssid.into(),
            capabilities: capabilities.into(),
            level,
            frequency,
            timestamp_us: 0,
        }
    }
}

/// Scan result plus bookkeeping from the scan that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanDetail {
    /// The parsed result; some drivers report details without one
    pub scan_result: Option<ScanResult>,
    /// When the scan detail was received
    pub seen: Timestamp,
}

impl ScanDetail {
    /// Wrap a scan result, stamped with the current time
    pub fn new(scan_result: ScanResult) -> Self {
        Self {
            scan_result: Some(scan_result),
            seen: Timestamp::now(),
        }
    }

    /// Wrap a scan result with an explicit receive time
    pub fn seen_at(scan_result: ScanResult, seen: Timestamp) -> Self {
        Self {
            scan_result: Some(scan_result),
            seen,
        }
    }

    /// A detail that carries no scan result
    pub fn empty() -> Self {
        Self {
            scan_result: None,
            seen: Timestamp::now(),
        }
    }

    pub fn scan_result(&self) -> Option<&ScanResult> {
        self.scan_result.as_ref()
    }
}

// ----------------------------------------------------------------------------
// Network Configuration
// ----------------------------------------------------------------------------

/// A saved network the device may connect to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub network_id: NetworkId,
    pub ssid: String,
    pub security: SecurityClass,
    /// Suggested by an app rather than saved by the user
    pub ephemeral: bool,
    /// Whether the user marked the network as trusted
    pub trusted: bool,
}

impl NetworkConfig {
    /// Create a configuration with explicit security
    pub fn new<S: Into<String>>(network_id: i32, ssid: S, security: SecurityClass) -> Self {
        Self {
            network_id: NetworkId::new(network_id),
            ssid: ssid.into(),
            security,
            ephemeral: false,
            trusted: true,
        }
    }

    /// Open network
    pub fn open<S: Into<String>>(network_id: i32, ssid: S) -> Self {
        Self::new(network_id, ssid, SecurityClass::Open)
    }

    /// WPA/WPA2 personal network
    pub fn psk<S: Into<String>>(network_id: i32, ssid: S) -> Self {
        Self::new(network_id, ssid, SecurityClass::Psk)
    }

    /// WPA3 personal network
    pub fn sae<S: Into<String>>(network_id: i32, ssid: S) -> Self {
        Self::new(network_id, ssid, SecurityClass::Sae)
    }

    /// Enterprise network
    pub fn eap<S: Into<String>>(network_id: i32, ssid: S) -> Self {
        Self::new(network_id, ssid, SecurityClass::Eap)
    }

    /// Mark the configuration as ephemeral
    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    /// Mark the configuration as untrusted
    pub fn untrusted(mut self) -> Self {
        self.trusted = false;
        self
    }
}
