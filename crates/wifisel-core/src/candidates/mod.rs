//! Candidate Arbitration Module
//!
//! This module contains the network candidate registry and its scoring contract:
//! - `key`: Composite identity of a candidate slot
//! - `candidate`: Immutable nominated access point
//! - `scored`: Real-valued judgment produced by a scorer
//! - `scorer`: Pluggable scoring strategy contract
//! - `registry`: The mutable candidate collection with replacement policy

pub mod candidate;
pub mod key;
pub mod registry;
pub mod scored;
pub mod scorer;

// Re-export key types
pub use key::CandidateKey;

// Re-export candidate types
pub use candidate::Candidate;

// Re-export scoring types
pub use scored::ScoredCandidate;
pub use scorer::{CandidateScorer, ScorerFn};

// Re-export registry types
pub use registry::{CandidateGroup, RegistryStats, WifiCandidates};
