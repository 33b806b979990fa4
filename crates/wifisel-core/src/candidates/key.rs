//! Candidate identity
//!
//! One slot per (SSID + security, BSSID, network id). Equality and hashing are
//! structural over all three fields.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::match_info::MatchInfo;
use crate::types::{MacAddress, NetworkId};

/// The key used for tracking candidates
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateKey {
    /// SSID and security class
    pub match_info: MatchInfo,
    pub bssid: MacAddress,
    /// Network configuration id
    pub network_id: NetworkId,
}

impl CandidateKey {
    pub fn new(match_info: MatchInfo, bssid: MacAddress, network_id: NetworkId) -> Self {
        Self {
            match_info,
            bssid,
            network_id,
        }
    }
}

impl fmt::Display for CandidateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.match_info, self.bssid, self.network_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_info::SecurityClass;
    use hashbrown::HashSet;

    fn key(ssid: &str, bssid: [u8; 6], id: i32) -> CandidateKey {
        CandidateKey::new(
            MatchInfo::new(ssid, SecurityClass::Psk),
            MacAddress::new(bssid),
            NetworkId::new(id),
        )
    }

    #[test]
    fn test_key_equality_covers_every_field() {
        let base = key("home", [1, 2, 3, 4, 5, 6], 1);
        assert_eq!(base, key("home", [1, 2, 3, 4, 5, 6], 1));
        assert_ne!(base, key("work", [1, 2, 3, 4, 5, 6], 1));
        assert_ne!(base, key("home", [1, 2, 3, 4, 5, 7], 1));
        assert_ne!(base, key("home", [1, 2, 3, 4, 5, 6], 2));

        let other_security = CandidateKey::new(
            MatchInfo::new("home", SecurityClass::Sae),
            MacAddress::new([1, 2, 3, 4, 5, 6]),
            NetworkId::new(1),
        );
        assert_ne!(base, other_security);
    }

    #[test]
    fn test_key_hash_consistent_with_equality() {
        let mut set = HashSet::new();
        set.insert(key("home", [1, 2, 3, 4, 5, 6], 1));
        set.insert(key("home", [1, 2, 3, 4, 5, 6], 1));
        set.insert(key("home", [1, 2, 3, 4, 5, 6], 2));
        assert_eq!(set.len(), 2);
    }
}
