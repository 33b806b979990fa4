//! Candidate registry
//!
//! Collects nominated access points for one network selection round. Each
//! (match info, BSSID, network id) slot holds at most one candidate; the first
//! nominator to propose a slot owns it, and only a strictly better score from that
//! same nominator replaces the occupant.
//!
//! Bad input is recorded as a fault and reported as `Ok(false)` so that a batch of
//! scan results survives a few malformed ones. In picky mode the same fault is
//! returned as an error instead.
//!
//! The registry is single-owner: build one per selection round and drive it from one
//! place. Nothing here blocks, locks or performs I/O.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::candidate::Candidate;
use super::key::CandidateKey;
use super::scored::ScoredCandidate;
use super::scorer::CandidateScorer;
use crate::config::RegistryConfig;
use crate::errors::CandidateFault;
use crate::match_info::MatchInfo;
use crate::scan::{NetworkConfig, ScanDetail};
use crate::score_card::{ScoreCard, ScoreCardEvent, SignalStats};
use crate::types::{MacAddress, NetworkId};
use crate::{Result, WifiselError};

// ----------------------------------------------------------------------------
// Candidate Groups
// ----------------------------------------------------------------------------

/// The candidates of one network, borrowed from the registry
///
/// A snapshot: it reflects the registry at the time it was built.
#[derive(Debug, Clone)]
pub struct CandidateGroup<'a> {
    network_id: NetworkId,
    candidates: SmallVec<[&'a Candidate; 2]>,
}

impl<'a> CandidateGroup<'a> {
    /// Network configuration id shared by every candidate in the group
    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    pub fn candidates(&self) -> &[&'a Candidate] {
        &self.candidates
    }
}

impl<'a> Deref for CandidateGroup<'a> {
    type Target = [&'a Candidate];

    fn deref(&self) -> &Self::Target {
        &self.candidates
    }
}

impl<'a, 'g> IntoIterator for &'g CandidateGroup<'a> {
    type Item = &'g &'a Candidate;
    type IntoIter = core::slice::Iter<'g, &'a Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

// ----------------------------------------------------------------------------
// Statistics
// ----------------------------------------------------------------------------

/// Running counters for a registry
///
/// Unlike the fault count, these survive `clear_faults`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Candidates inserted into an empty slot
    pub additions: usize,
    /// Occupants replaced by a better score from the same nominator
    pub replacements: usize,
    /// Nominations turned away by replacement policy (not faults)
    pub policy_rejections: usize,
    /// Successful explicit removals
    pub removals: usize,
    /// Every fault ever captured
    pub faults_total: usize,
}

// ----------------------------------------------------------------------------
// Registry
// ----------------------------------------------------------------------------

/// Candidates for network selection
pub struct WifiCandidates {
    candidates: HashMap<CandidateKey, Candidate>,
    config: RegistryConfig,
    score_card: Option<Arc<dyn ScoreCard>>,
    last_fault: Option<CandidateFault>,
    fault_count: usize,
    stats: RegistryStats,
}

impl WifiCandidates {
    /// Create an empty registry with default configuration
    pub fn new() -> Self {
        Self::build(RegistryConfig::default())
    }

    /// Create an empty registry with the given configuration
    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RegistryConfig) -> Self {
        Self {
            candidates: HashMap::default(),
            config,
            score_card: None,
            last_fault: None,
            fault_count: 0,
            stats: RegistryStats::default(),
        }
    }

    /// Attach a score card for historical statistics lookups
    pub fn with_score_card(mut self, score_card: Arc<dyn ScoreCard>) -> Self {
        self.score_card = Some(score_card);
        self
    }

    /// Adds a new candidate
    ///
    /// Returns `Ok(true)` if the candidate was added or replaced an occupant, and
    /// `Ok(false)` if it was turned away, either by replacement policy or because of a
    /// fault. In picky mode faults are returned as `Err` instead.
    pub fn add(
        &mut self,
        scan_detail: Option<&ScanDetail>,
        config: Option<&NetworkConfig>,
        nominator_index: u32,
        nominator_score: i32,
    ) -> Result<bool> {
        let Some(config) = config else {
            return self.failure(CandidateFault::MissingConfig);
        };
        let Some(scan_detail) = scan_detail else {
            return self.failure(CandidateFault::MissingScanDetail);
        };
        let Some(scan_result) = scan_detail.scan_result() else {
            return self.failure(CandidateFault::MissingScanResult);
        };
        let bssid = match scan_result.bssid.parse::<MacAddress>() {
            Ok(bssid) => bssid,
            Err(source) => {
                return self.failure(CandidateFault::MalformedBssid {
                    bssid: scan_result.bssid.clone(),
                    source,
                });
            }
        };

        let config_info = MatchInfo::from_config(config);
        let scan_info = MatchInfo::from_scan_result(scan_result);
        if config_info != scan_info {
            return self.failure(CandidateFault::MatchInfoMismatch {
                config: config_info,
                scan: scan_info,
            });
        }

        let key = CandidateKey::new(config_info, bssid, config.network_id);
        let occupant = self
            .candidates
            .get(&key)
            .map(|old| (old.nominator_index(), old.nominator_score()));

        if let Some((occupant_index, occupant_score)) = occupant {
            if nominator_index < occupant_index {
                return self.failure(CandidateFault::NominatorOutOfOrder {
                    bssid,
                    network_id: config.network_id,
                    index: nominator_index,
                    occupant_index,
                });
            }
            if nominator_index > occupant_index || nominator_score <= occupant_score {
                self.stats.policy_rejections += 1;
                trace!(
                    %key,
                    nominator_index,
                    nominator_score,
                    occupant_score,
                    "Nomination kept incumbent"
                );
                return Ok(false);
            }
            self.stats.replacements += 1;
            trace!(%key, nominator_score, occupant_score, "Replacing candidate");
        } else {
            self.stats.additions += 1;
            trace!(%key, nominator_index, nominator_score, "Adding candidate");
        }

        let candidate = Candidate::new(
            key.clone(),
            scan_result.clone(),
            scan_detail.seen,
            config.clone(),
            nominator_index,
            nominator_score,
        );
        self.candidates.insert(key, candidate);
        Ok(true)
    }

    /// Removes a candidate
    ///
    /// Only removes the entry if it is still the registry's current occupant for the
    /// candidate's key; a superseded or unknown candidate is a fault.
    pub fn remove(&mut self, candidate: Option<&Candidate>) -> Result<bool> {
        let Some(candidate) = candidate else {
            return self.failure(CandidateFault::MissingCandidate);
        };

        if self.candidates.get(candidate.key()) != Some(candidate) {
            return self.failure(CandidateFault::StaleCandidate {
                bssid: candidate.bssid(),
                network_id: candidate.network_id(),
            });
        }

        self.candidates.remove(candidate.key());
        self.stats.removals += 1;
        trace!(key = %candidate.key(), "Removed candidate");
        Ok(true)
    }

    /// Number of candidates (at the BSSID level)
    pub fn size(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The current occupant of a slot
    pub fn get(&self, key: &CandidateKey) -> Option<&Candidate> {
        self.candidates.get(key)
    }

    /// Iterate over all candidates, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.values()
    }

    /// The candidates, grouped by network id
    ///
    /// Every candidate appears in exactly one group. Group order, and order within a
    /// group, is unspecified.
    pub fn grouped_candidates(&self) -> Vec<CandidateGroup<'_>> {
        let capacity = self.config.expected_bssids_per_network;
        let mut by_network: HashMap<NetworkId, SmallVec<[&Candidate; 2]>> = HashMap::default();
        for candidate in self.candidates.values() {
            by_network
                .entry(candidate.network_id())
                .or_insert_with(|| SmallVec::with_capacity(capacity))
                .push(candidate);
        }

        by_network
            .into_iter()
            .map(|(network_id, candidates)| CandidateGroup {
                network_id,
                candidates,
            })
            .collect()
    }

    /// Make a choice from among the candidates, using the provided scorer
    ///
    /// The scorer is invoked once per network group; the judgment with the highest
    /// value wins. Returns `ScoredCandidate::none()` when the registry is empty or the
    /// scorer abstains for every group.
    pub fn choose<S: CandidateScorer + ?Sized>(&self, scorer: &S) -> ScoredCandidate {
        let mut choice = ScoredCandidate::none();
        let mut groups_scored = 0usize;
        for group in self.grouped_candidates() {
            if let Some(scored) = scorer.score_candidates(&group) {
                groups_scored += 1;
                if scored.is_better_than(&choice) {
                    choice = scored;
                }
            }
        }

        debug!(
            scorer = scorer.identifier(),
            candidates = self.candidates.len(),
            groups_scored,
            value = choice.value,
            chosen = ?choice.candidate_key,
            "Candidate choice made"
        );
        choice
    }

    /// Historical statistics for a candidate, if a score card is attached
    pub fn event_statistics(
        &self,
        candidate: &Candidate,
        event: ScoreCardEvent,
    ) -> Option<SignalStats> {
        let score_card = self.score_card.as_deref()?;
        candidate.event_statistics(score_card, event)
    }

    /// After a failure indication is returned, this may be used to get details
    pub fn last_fault(&self) -> Option<&CandidateFault> {
        self.last_fault.as_ref()
    }

    /// Number of faults seen since creation or the last `clear_faults`
    pub fn fault_count(&self) -> usize {
        self.fault_count
    }

    /// Clears any recorded faults
    pub fn clear_faults(&mut self) {
        self.last_fault = None;
        self.fault_count = 0;
    }

    /// Controls whether faults are returned as errors rather than recorded
    pub fn set_picky(&mut self, picky: bool) -> &mut Self {
        self.config.picky = picky;
        self
    }

    pub fn is_picky(&self) -> bool {
        self.config.picky
    }

    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Records details about a failure
    ///
    /// Returns `Ok(false)`, or the fault as an error in picky mode.
    fn failure(&mut self, fault: CandidateFault) -> Result<bool> {
        self.fault_count += 1;
        self.stats.faults_total += 1;

        if self.config.log_faults {
            if self.config.picky {
                warn!(fault = ?fault, faults = self.fault_count, "Candidate fault");
            } else {
                debug!(fault = ?fault, faults = self.fault_count, "Candidate fault recorded");
            }
        }

        self.last_fault = Some(fault.clone());
        if self.config.picky {
            return Err(WifiselError::Fault(fault));
        }
        Ok(false)
    }
}

impl Default for WifiCandidates {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WifiCandidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCandidates")
            .field("candidates", &self.candidates.len())
            .field("config", &self.config)
            .field("score_card", &self.score_card.is_some())
            .field("last_fault", &self.last_fault)
            .field("fault_count", &self.fault_count)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::ScanResult;
    use crate::types::Timestamp;

    const BSSID_A: &str = "00:11:22:33:44:55";
    const BSSID_B: &str = "00:11:22:33:44:66";

    fn psk_scan(ssid: &str, bssid: &str, level: i32) -> ScanDetail {
        ScanDetail::seen_at(
            ScanResult::new(ssid, bssid, "[WPA2-PSK-CCMP][ESS]", level, 5180),
            Timestamp::new(1_000),
        )
    }

    #[test]
    fn test_add_and_replace_with_better_score() {
        let mut candidates = WifiCandidates::new();
        let config = NetworkConfig::psk(1, "home");

        assert!(candidates
            .add(Some(&psk_scan("home", BSSID_A, -60)), Some(&config), 0, 10)
            .unwrap());
        assert!(candidates
            .add(Some(&psk_scan("home", BSSID_A, -55)), Some(&config), 0, 15)
            .unwrap());

        assert_eq!(candidates.size(), 1);
        let occupant = candidates.iter().next().unwrap();
        assert_eq!(occupant.nominator_score(), 15);
        assert_eq!(occupant.scan_rssi(), -55);
        assert_eq!(candidates.stats().additions, 1);
        assert_eq!(candidates.stats().replacements, 1);
        assert_eq!(candidates.fault_count(), 0);
    }

    #[test]
    fn test_policy_rejection_is_not_a_fault() {
        let mut candidates = WifiCandidates::new();
        let config = NetworkConfig::psk(1, "home");
        let scan = psk_scan("home", BSSID_A, -60);

        assert!(candidates.add(Some(&scan), Some(&config), 1, 10).unwrap());
        // Later nominator never overrides
        assert!(!candidates.add(Some(&scan), Some(&config), 2, 99).unwrap());
        // Tie keeps the incumbent
        assert!(!candidates.add(Some(&scan), Some(&config), 1, 10).unwrap());
        // Worse score from the same nominator
        assert!(!candidates.add(Some(&scan), Some(&config), 1, 5).unwrap());

        assert_eq!(candidates.fault_count(), 0);
        assert!(candidates.last_fault().is_none());
        assert_eq!(candidates.stats().policy_rejections, 3);
    }

    #[test]
    fn test_missing_inputs_are_faults() {
        let mut candidates = WifiCandidates::new();
        let config = NetworkConfig::psk(1, "home");
        let scan = psk_scan("home", BSSID_A, -60);

        assert!(!candidates.add(Some(&scan), None, 0, 0).unwrap());
        assert_eq!(candidates.last_fault(), Some(&CandidateFault::MissingConfig));

        assert!(!candidates.add(None, Some(&config), 0, 0).unwrap());
        assert_eq!(candidates.last_fault(), Some(&CandidateFault::MissingScanDetail));

        let empty = ScanDetail::empty();
        assert!(!candidates.add(Some(&empty), Some(&config), 0, 0).unwrap());
        assert_eq!(candidates.last_fault(), Some(&CandidateFault::MissingScanResult));

        assert_eq!(candidates.fault_count(), 3);
        assert_eq!(candidates.size(), 0);
    }

    #[test]
    fn test_malformed_bssid_is_a_fault() {
        let mut candidates = WifiCandidates::new();
        let config = NetworkConfig::psk(1, "home");
        let scan = psk_scan("home", "00:11:22:33:44", -60);

        assert!(!candidates.add(Some(&scan), Some(&config), 0, 0).unwrap());
        assert!(matches!(
            candidates.last_fault(),
            Some(CandidateFault::MalformedBssid { .. })
        ));
        assert_eq!(candidates.size(), 0);
    }

    #[test]
    fn test_remove_requires_current_occupant() {
        let mut candidates = WifiCandidates::new();
        let config = NetworkConfig::psk(1, "home");

        candidates
            .add(Some(&psk_scan("home", BSSID_A, -60)), Some(&config), 0, 10)
            .unwrap();
        let original = candidates.iter().next().unwrap().clone();

        candidates
            .add(Some(&psk_scan("home", BSSID_A, -50)), Some(&config), 0, 20)
            .unwrap();

        // The original was superseded
        assert!(!candidates.remove(Some(&original)).unwrap());
        assert!(matches!(
            candidates.last_fault(),
            Some(CandidateFault::StaleCandidate { .. })
        ));
        assert_eq!(candidates.size(), 1);

        let current = candidates.iter().next().unwrap().clone();
        assert!(candidates.remove(Some(&current)).unwrap());
        assert!(candidates.is_empty());
        assert_eq!(candidates.stats().removals, 1);

        assert!(!candidates.remove(None).unwrap());
        assert_eq!(candidates.last_fault(), Some(&CandidateFault::MissingCandidate));
    }

    #[test]
    fn test_grouping_by_network_id() {
        let mut candidates = WifiCandidates::new();
        let home = NetworkConfig::psk(1, "home");
        let work = NetworkConfig::psk(2, "work");

        candidates
            .add(Some(&psk_scan("home", BSSID_A, -60)), Some(&home), 0, 0)
            .unwrap();
        candidates
            .add(Some(&psk_scan("home", BSSID_B, -70)), Some(&home), 0, 0)
            .unwrap();
        candidates
            .add(Some(&psk_scan("work", BSSID_A, -80)), Some(&work), 0, 0)
            .unwrap();

        let mut groups = candidates.grouped_candidates();
        groups.sort_by_key(|g| g.network_id());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].network_id(), NetworkId::new(1));
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].network_id(), NetworkId::new(2));
        assert_eq!(groups[1].len(), 1);
    }

    #[test]
    fn test_picky_mode_returns_fault_as_error() {
        let mut candidates = WifiCandidates::new();
        candidates.set_picky(true);

        let err = candidates
            .add(Some(&psk_scan("home", BSSID_A, -60)), None, 0, 0)
            .unwrap_err();
        assert_eq!(err.as_fault(), Some(&CandidateFault::MissingConfig));
        assert_eq!(candidates.fault_count(), 1);
        assert_eq!(candidates.last_fault(), Some(&CandidateFault::MissingConfig));
    }

    #[test]
    fn test_clear_faults_keeps_stats() {
        let mut candidates = WifiCandidates::new();
        candidates.add(None, None, 0, 0).unwrap();
        candidates.add(None, None, 0, 0).unwrap();
        assert_eq!(candidates.fault_count(), 2);

        candidates.clear_faults();
        assert_eq!(candidates.fault_count(), 0);
        assert!(candidates.last_fault().is_none());
        assert_eq!(candidates.stats().faults_total, 2);
    }
}
