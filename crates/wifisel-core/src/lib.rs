//! Wi-Fi Network Candidate Arbitration
//!
//! This crate collects the access points seen in a scan together with the saved
//! networks they could satisfy, keeps the best nomination per (network, BSSID) slot,
//! and hands each network's group of access points to a pluggable scorer to make the
//! final choice. It is `no_std + alloc` compatible; the `std` feature (on by default)
//! adds `std::error::Error` implementations.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// ----------------------------------------------------------------------------
// Module Declarations
// ----------------------------------------------------------------------------

pub mod candidates;
pub mod config;
pub mod errors;
pub mod match_info;
pub mod scan;
pub mod score_card;
pub mod types;

// ----------------------------------------------------------------------------
// Public API
// ----------------------------------------------------------------------------

pub use candidates::{
    Candidate, CandidateGroup, CandidateKey, CandidateScorer, RegistryStats, ScoredCandidate,
    ScorerFn, WifiCandidates,
};
pub use config::RegistryConfig;
pub use errors::{CandidateFault, MacAddressError, Result, WifiselError, WifiselResult};
pub use match_info::{MatchInfo, SecurityClass};
pub use scan::{NetworkConfig, ScanDetail, ScanResult};
pub use score_card::{ScoreCard, ScoreCardEvent, SignalStats};
pub use types::{MacAddress, NetworkId, Timestamp};
