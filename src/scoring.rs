//! Lead scoring
//!
//! The only scorer shipped today is a placeholder: it ignores the lead's
//! content and draws a uniform random score. The random source is injected
//! so that tests (and `SCORING_SEED`) can make the output reproducible.

use crate::models::{InsightResult, LeadRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Mutex;

/// Scores are drawn from `0..SCORE_UPPER_BOUND`.
pub const SCORE_UPPER_BOUND: u8 = 100;

/// Follow-up actions recommended for every lead.
pub const FOLLOW_UP_ACTIONS: [&str; 3] = [
    "Send email with personalized content",
    "Schedule a follow-up call",
    "Offer a special discount",
];

/// Failure produced while scoring a lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringError {
    message: String,
}

impl ScoringError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ScoringError {}

/// Produces insights for a lead.
pub trait LeadScorer: Send + Sync {
    fn score(&self, lead: &LeadRecord) -> Result<InsightResult, ScoringError>;
}

/// Placeholder scorer returning random scores and a fixed action list.
pub struct MockLeadScorer {
    rng: Mutex<StdRng>,
}

impl MockLeadScorer {
    /// Scorer seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Scorer producing the same sequence of scores for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Builds the scorer from an optional configured seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl LeadScorer for MockLeadScorer {
    fn score(&self, _lead: &LeadRecord) -> Result<InsightResult, ScoringError> {
        let score = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| ScoringError::new("random source unavailable"))?;
            rng.gen_range(0..SCORE_UPPER_BOUND)
        };

        Ok(InsightResult {
            score,
            follow_up_actions: FOLLOW_UP_ACTIONS.iter().map(|a| a.to_string()).collect(),
        })
    }
}
