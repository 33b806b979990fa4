//! Candidate scoring contract
//!
//! A scorer sees one network's group of candidates at a time and returns at most one
//! judgment for it. Scorers are stateless: the registry may call them in any group
//! order, and they must not rely on state carried between calls.

use alloc::string::String;
use core::fmt;

use super::registry::CandidateGroup;
use super::scored::ScoredCandidate;

/// Represents a scoring function
pub trait CandidateScorer {
    /// The scorer's name, and perhaps important parameterization/version
    ///
    /// Used to correlate log records and telemetry, never to change behavior.
    fn identifier(&self) -> &str;

    /// Score a group of candidates that belong to the same network
    ///
    /// Returning `None` abstains for this group.
    fn score_candidates(&self, group: &CandidateGroup<'_>) -> Option<ScoredCandidate>;

    /// Whether the caller should still honor a user's manual connect choice over this
    /// scorer's result. The registry only exposes this flag.
    fn user_connect_choice_override_wanted(&self) -> bool;
}

/// A scorer backed by a plain function or closure
pub struct ScorerFn<F> {
    identifier: String,
    user_connect_choice_override: bool,
    score: F,
}

impl<F> ScorerFn<F> {
    /// Wrap `score` under the given identifier
    pub fn new<S>(identifier: S, user_connect_choice_override: bool, score: F) -> Self
    where
        S: Into<String>,
        F: Fn(&CandidateGroup<'_>) -> Option<ScoredCandidate>,
    {
        Self {
            identifier: identifier.into(),
            user_connect_choice_override,
            score,
        }
    }
}

impl<F> CandidateScorer for ScorerFn<F>
where
    F: Fn(&CandidateGroup<'_>) -> Option<ScoredCandidate>,
{
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn score_candidates(&self, group: &CandidateGroup<'_>) -> Option<ScoredCandidate> {
        (self.score)(group)
    }

    fn user_connect_choice_override_wanted(&self) -> bool {
        self.user_connect_choice_override
    }
}

impl<F> fmt::Debug for ScorerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScorerFn")
            .field("identifier", &self.identifier)
            .field(
                "user_connect_choice_override",
                &self.user_connect_choice_override,
            )
            .finish_non_exhaustive()
    }
}
