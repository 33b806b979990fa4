//! Nominated access point

use serde::Serialize;

use super::key::CandidateKey;
use crate::scan::{NetworkConfig, ScanResult};
use crate::score_card::{ScoreCard, ScoreCardEvent, SignalStats};
use crate::types::{MacAddress, NetworkId, Timestamp};

/// Represents a connectable candidate
///
/// Immutable once built: the registry replaces a candidate by removing it and
/// inserting a new one, never by updating it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    key: CandidateKey,
    scan_result: ScanResult,
    seen: Timestamp,
    config: NetworkConfig,
    nominator_index: u32,
    nominator_score: i32,
}

impl Candidate {
    /// Build a candidate from an already validated observation
    pub(crate) fn new(
        key: CandidateKey,
        scan_result: ScanResult,
        seen: Timestamp,
        config: NetworkConfig,
        nominator_index: u32,
        nominator_score: i32,
    ) -> Self {
        Self {
            key,
            scan_result,
            seen,
            config,
            nominator_index,
            nominator_score,
        }
    }

    pub fn key(&self) -> &CandidateKey {
        &self.key
    }

    pub fn bssid(&self) -> MacAddress {
        self.key.bssid
    }

    pub fn network_id(&self) -> NetworkId {
        self.key.network_id
    }

    /// The scan result this candidate was nominated from
    pub fn scan_result(&self) -> &ScanResult {
        &self.scan_result
    }

    /// When the scan detail was received
    pub fn seen(&self) -> Timestamp {
        self.seen
    }

    /// The saved network this access point satisfies
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// First nominator to propose this slot
    pub fn nominator_index(&self) -> u32 {
        self.nominator_index
    }

    /// Score given by the first nominator
    pub fn nominator_score(&self) -> i32 {
        self.nominator_score
    }

    /// Signal level at scan time, dBm
    pub fn scan_rssi(&self) -> i32 {
        self.scan_result.level
    }

    /// Channel frequency, MHz
    pub fn frequency(&self) -> u32 {
        self.scan_result.frequency
    }

    /// Historical signal statistics for this BSSID from a score card
    pub fn event_statistics(
        &self,
        score_card: &dyn ScoreCard,
        event: ScoreCardEvent,
    ) -> Option<SignalStats> {
        score_card.signal_stats(&self.key.match_info.ssid, &self.key.bssid, event)
    }
}
