//! Interaction - One contact attempt against a Lead
//!
//! Interactions are immutable. Once recorded they are only ever
//! prepended to the history, never edited.

use super::lead::LeadId;
use super::system_log::Impact;
use super::time::Timestamp;
use super::user::UserId;

/// Unique identifier for an Interaction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractionId(String);

impl InteractionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Channel of the contact attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionType {
    Call,
    Email,
    Meeting,
}

impl InteractionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::Call => "call",
            InteractionType::Email => "email",
            InteractionType::Meeting => "meeting",
        }
    }
}

impl core::fmt::Display for InteractionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the contact attempt went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
    Neutral,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
            Outcome::Neutral => "neutral",
        }
    }

    /// Audit impact an outcome is logged with
    pub fn impact(&self) -> Impact {
        match self {
            Outcome::Success => Impact::Positive,
            Outcome::Failure => Impact::Negative,
            Outcome::Neutral => Impact::Neutral,
        }
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sentiment assumed when nobody scored the conversation
pub const DEFAULT_SENTIMENT: u8 = 50;

/// Interaction - An immutable contact record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    id: InteractionId,
    lead_id: LeadId,
    user_id: UserId,
    kind: InteractionType,
    outcome: Outcome,
    notes: String,
    timestamp: Timestamp,
    /// AI-derived sentiment, 0-100
    sentiment: u8,
}

impl Interaction {
    pub fn new(
        id: InteractionId,
        lead_id: LeadId,
        user_id: UserId,
        kind: InteractionType,
        outcome: Outcome,
    ) -> Self {
        Self {
            id,
            lead_id,
            user_id,
            kind,
            outcome,
            notes: String::new(),
            timestamp: Timestamp::default(),
            sentiment: DEFAULT_SENTIMENT,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn at(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builder: sentiment score, clamped to 100
    pub fn with_sentiment(mut self, sentiment: u8) -> Self {
        self.sentiment = sentiment.min(100);
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &InteractionId {
        &self.id
    }

    pub fn lead_id(&self) -> &LeadId {
        &self.lead_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn kind(&self) -> InteractionType {
        self.kind
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn sentiment(&self) -> u8 {
        self.sentiment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(outcome: Outcome) -> Interaction {
        Interaction::new(
            InteractionId::new("i-001"),
            LeadId::new("l-001"),
            UserId::new("u1"),
            InteractionType::Call,
            outcome,
        )
    }

    #[test]
    fn test_default_sentiment() {
        assert_eq!(call(Outcome::Neutral).sentiment(), DEFAULT_SENTIMENT);
    }

    #[test]
    fn test_sentiment_is_clamped() {
        assert_eq!(call(Outcome::Success).with_sentiment(250).sentiment(), 100);
        assert_eq!(call(Outcome::Success).with_sentiment(73).sentiment(), 73);
    }

    #[test]
    fn test_outcome_impact() {
        assert_eq!(Outcome::Success.impact(), Impact::Positive);
        assert_eq!(Outcome::Failure.impact(), Impact::Negative);
        assert_eq!(Outcome::Neutral.impact(), Impact::Neutral);
    }
}
