//! Error types for candidate arbitration
//!
//! This module contains the fault taxonomy recorded by the candidate registry,
//! hardware address parse errors, and the `WifiselError` type that unifies them.

use alloc::string::String;

use crate::match_info::MatchInfo;
use crate::types::{MacAddress, NetworkId};

// ----------------------------------------------------------------------------
// Hardware Address Errors
// ----------------------------------------------------------------------------

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        /// Reasons a BSSID string failed to parse
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum MacAddressError {
            #[error("Empty hardware address")]
            Empty,
            #[error("Hardware address must have 6 octets, got {count}")]
            WrongOctetCount { count: usize },
            #[error("Invalid hardware address octet '{octet}'")]
            InvalidOctet { octet: String },
        }
    } else {
        /// Reasons a BSSID string failed to parse (no_std version)
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum MacAddressError {
            Empty,
            WrongOctetCount { count: usize },
            InvalidOctet { octet: String },
        }
    }
}

// ----------------------------------------------------------------------------
// Registry Faults
// ----------------------------------------------------------------------------

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        /// An input-validity problem captured by the candidate registry
        ///
        /// Policy rejections (a later nominator, or a score that does not improve on the
        /// occupant) are not faults and never produce one of these.
        #[derive(Debug, Clone, PartialEq, thiserror::Error)]
        pub enum CandidateFault {
            #[error("No network configuration supplied")]
            MissingConfig,
            #[error("No scan detail supplied")]
            MissingScanDetail,
            #[error("Scan detail carries no scan result")]
            MissingScanResult,
            #[error("Malformed BSSID '{bssid}': {source}")]
            MalformedBssid {
                bssid: String,
                #[source]
                source: MacAddressError,
            },
            #[error("Match info mismatch: config {config}, scan {scan}")]
            MatchInfoMismatch { config: MatchInfo, scan: MatchInfo },
            #[error("Nominator {index} for {bssid} (network {network_id}) precedes occupant nominator {occupant_index}")]
            NominatorOutOfOrder {
                bssid: MacAddress,
                network_id: NetworkId,
                index: u32,
                occupant_index: u32,
            },
            #[error("No candidate supplied for removal")]
            MissingCandidate,
            #[error("Candidate {bssid} (network {network_id}) is not the current occupant")]
            StaleCandidate { bssid: MacAddress, network_id: NetworkId },
        }
    } else {
        /// An input-validity problem captured by the candidate registry (no_std version)
        #[derive(Debug, Clone, PartialEq)]
        pub enum CandidateFault {
            MissingConfig,
            MissingScanDetail,
            MissingScanResult,
            MalformedBssid { bssid: String, source: MacAddressError },
            MatchInfoMismatch { config: MatchInfo, scan: MatchInfo },
            NominatorOutOfOrder {
                bssid: MacAddress,
                network_id: NetworkId,
                index: u32,
                occupant_index: u32,
            },
            MissingCandidate,
            StaleCandidate { bssid: MacAddress, network_id: NetworkId },
        }
    }
}

// ----------------------------------------------------------------------------
// Unified Error
// ----------------------------------------------------------------------------

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        /// Core error type for the crate
        #[derive(Debug, Clone, PartialEq, thiserror::Error)]
        pub enum WifiselError {
            /// Raised only when the registry is in picky mode
            #[error("Candidate fault: {0}")]
            Fault(#[from] CandidateFault),

            #[error("Invalid score: value {value}, err {err}")]
            InvalidScore { value: f64, err: f64 },

            #[error("Configuration error: {reason}")]
            Configuration { reason: String },
        }
    } else {
        /// Core error type for the crate (no_std version)
        #[derive(Debug, Clone, PartialEq)]
        pub enum WifiselError {
            Fault(CandidateFault),
            InvalidScore { value: f64, err: f64 },
            Configuration { reason: String },
        }

        impl From<CandidateFault> for WifiselError {
            fn from(fault: CandidateFault) -> Self {
                WifiselError::Fault(fault)
            }
        }
    }
}

// ----------------------------------------------------------------------------
// Convenience Error Constructors
// ----------------------------------------------------------------------------

impl WifiselError {
    /// Create a configuration error with a reason
    pub fn config_error<T: Into<String>>(reason: T) -> Self {
        WifiselError::Configuration {
            reason: reason.into(),
        }
    }

    /// The captured fault, if this error came from picky mode
    pub fn as_fault(&self) -> Option<&CandidateFault> {
        match self {
            WifiselError::Fault(fault) => Some(fault),
            _ => None,
        }
    }
}

// ----------------------------------------------------------------------------
// Type Aliases
// ----------------------------------------------------------------------------

pub type Result<T> = core::result::Result<T, WifiselError>;
pub type WifiselResult<T> = Result<T>;
