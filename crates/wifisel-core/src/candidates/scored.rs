//! Scored candidates
//!
//! Larger values reflect more desirable candidates. The range is arbitrary, since
//! scores from different scorers are never compared with each other. The error
//! estimate is on the same scale as the value (a standard deviation, say) and is
//! strictly positive for every real judgment.

use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::key::CandidateKey;
use crate::{Result, WifiselError};

/// A candidate with a real-valued score and an error estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub value: f64,
    pub err: f64,
    /// The judged candidate; `None` only for the no-score sentinel
    pub candidate_key: Option<CandidateKey>,
}

impl ScoredCandidate {
    /// Score a candidate
    ///
    /// Fails with `InvalidScore` unless `value` is finite and `err` is finite and
    /// strictly positive. Only `none()` carries infinities.
    pub fn new(value: f64, err: f64, candidate: &Candidate) -> Result<Self> {
        if !value.is_finite() || !err.is_finite() || err <= 0.0 {
            return Err(WifiselError::InvalidScore { value, err });
        }
        Ok(Self {
            value,
            err,
            candidate_key: Some(candidate.key().clone()),
        })
    }

    /// Represents no score; worse than any real judgment
    pub fn none() -> Self {
        Self {
            value: f64::NEG_INFINITY,
            err: f64::INFINITY,
            candidate_key: None,
        }
    }

    /// Whether this is the no-score sentinel
    pub fn is_none(&self) -> bool {
        self.candidate_key.is_none()
    }

    /// Whether this judgment beats another
    pub fn is_better_than(&self, other: &ScoredCandidate) -> bool {
        self.value > other.value
    }
}

impl Default for ScoredCandidate {
    fn default() -> Self {
        Self::none()
    }
}
