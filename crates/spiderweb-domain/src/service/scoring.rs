//! Scoring Matrix - Point values for every scoring event
//!
//! This table is the only place point values live. A new event gets a
//! variant here and a row in [`ScoreEvent::score_delta`], never a literal
//! at the call site.

use crate::model::interaction::{InteractionType, Outcome};

/// Named scoring events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreEvent {
    LeadFound,
    /// Stacks on top of `LeadFound`
    LeadPhoneBonus,
    InteractionSucceeded,
    InteractionFailed,
    InteractionNeutral,
    TrainingCompleted,
    AiTaskCompleted,
}

impl ScoreEvent {
    /// Signed KPI delta
    pub const fn score_delta(self) -> i64 {
        match self {
            ScoreEvent::LeadFound => 10,
            ScoreEvent::LeadPhoneBonus => 5,
            ScoreEvent::InteractionSucceeded => 50,
            ScoreEvent::InteractionFailed => -5,
            ScoreEvent::InteractionNeutral => 0,
            ScoreEvent::TrainingCompleted => 15,
            ScoreEvent::AiTaskCompleted => 2,
        }
    }

    /// Wallet delta (flat commission)
    pub const fn wallet_delta(self) -> i64 {
        match self {
            ScoreEvent::InteractionSucceeded => 50,
            _ => 0,
        }
    }

    /// Scoring event for an interaction outcome
    pub const fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ScoreEvent::InteractionSucceeded,
            Outcome::Failure => ScoreEvent::InteractionFailed,
            Outcome::Neutral => ScoreEvent::InteractionNeutral,
        }
    }

    pub fn all() -> &'static [ScoreEvent] {
        &[
            ScoreEvent::LeadFound,
            ScoreEvent::LeadPhoneBonus,
            ScoreEvent::InteractionSucceeded,
            ScoreEvent::InteractionFailed,
            ScoreEvent::InteractionNeutral,
            ScoreEvent::TrainingCompleted,
            ScoreEvent::AiTaskCompleted,
        ]
    }
}

/// Derived rules built on the event table
pub struct ScoringMatrix;

impl ScoringMatrix {
    pub const TELESALES_TRAINING: &'static str = "Advanced Telesales Skills";
    pub const EMAIL_TRAINING: &'static str = "Writing Better Emails";

    /// Training module assigned after a failed interaction of this type
    pub const fn remedial_training(kind: InteractionType) -> &'static str {
        match kind {
            InteractionType::Call => Self::TELESALES_TRAINING,
            InteractionType::Email | InteractionType::Meeting => Self::EMAIL_TRAINING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_success_pays_commission() {
        for event in ScoreEvent::all() {
            let expected = if *event == ScoreEvent::InteractionSucceeded { 50 } else { 0 };
            assert_eq!(event.wallet_delta(), expected, "{:?}", event);
        }
    }

    #[test]
    fn test_remedial_training() {
        assert_eq!(
            ScoringMatrix::remedial_training(InteractionType::Call),
            "Advanced Telesales Skills"
        );
        assert_eq!(
            ScoringMatrix::remedial_training(InteractionType::Email),
            "Writing Better Emails"
        );
        assert_eq!(
            ScoringMatrix::remedial_training(InteractionType::Meeting),
            "Writing Better Emails"
        );
    }

    #[test]
    fn test_outcome_mapping() {
        assert_eq!(ScoreEvent::for_outcome(Outcome::Failure).score_delta(), -5);
        assert_eq!(ScoreEvent::for_outcome(Outcome::Neutral).score_delta(), 0);
    }
}
