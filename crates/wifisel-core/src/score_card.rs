//! Historical per-BSSID statistics lookup
//!
//! The score card itself (collection, persistence, aging) lives outside this crate.
//! Candidates only read from it, through the `ScoreCard` trait.

use serde::{Deserialize, Serialize};

use crate::types::MacAddress;

/// Connection lifecycle moments at which signal statistics are sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreCardEvent {
    SignalPoll,
    ScanBeforeConnect,
    FirstPollAfterConnection,
    LastPollBeforeRoam,
    IpConfigurationSuccess,
    ConnectionFailure,
}

/// Summary statistics of one signal measurement (e.g. RSSI in dBm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalStats {
    pub count: u32,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
}

/// Read-only access to historical statistics
pub trait ScoreCard {
    /// Statistics recorded for `bssid` on network `ssid` at the given event
    fn signal_stats(&self, ssid: &str, bssid: &MacAddress, event: ScoreCardEvent)
        -> Option<SignalStats>;
}
