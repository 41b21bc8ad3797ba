//! Reaction Engine - One action in, a web of reactions out
//!
//! Every user action (or autopilot tick) becomes a [`Trigger`]. The engine
//! looks up the scoring matrix, derives the secondary effects, writes the
//! audit trail and reports what it did as a [`Reaction`].
//!
//! This is pure domain logic - no I/O, no async. The engine mutates the
//! `&mut AppState` it is handed; committing that state as a single
//! replacement is the store's job.

use crate::model::interaction::{Interaction, Outcome};
use crate::model::lead::Lead;
use crate::model::module::ModuleId;
use crate::model::state::AppState;
use crate::model::system_log::{Impact, LogId, SystemLog};
use crate::port::clock::{Clock, IdGenerator};
use crate::service::scoring::{ScoreEvent, ScoringMatrix};

/// Events the engine reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// A discovered lead is admitted into the CRM
    NewLead(Lead),
    /// A contact attempt was logged
    Interaction(Interaction),
    /// The operator finished a training module
    TrainingCompleted { module: String },
    /// An AI tool ran, by hand or by the autopilot
    AiAction { module: ModuleId, label: String },
}

/// What a single trigger did to the state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reaction {
    pub score_delta: i64,
    pub wallet_delta: i64,
    /// Audit entries written by this reaction
    pub logs_written: usize,
    /// The lead as stored, for `NewLead`
    pub admitted_lead: Option<Lead>,
    /// Training module newly queued, for failed interactions
    pub training_assigned: Option<String>,
    /// Whether a completed module was actually pending
    pub training_removed: bool,
    /// For interactions: whether the lead reference matched a stored lead
    pub lead_matched: Option<bool>,
}

/// ReactionEngine - The scoring rules applied to state
pub struct ReactionEngine<C, G> {
    clock: C,
    ids: G,
}

impl<C: Clock, G: IdGenerator> ReactionEngine<C, G> {
    /// Create a new ReactionEngine
    pub fn new(clock: C, ids: G) -> Self {
        Self { clock, ids }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn ids(&self) -> &G {
        &self.ids
    }

    /// Dispatch a trigger to its handler
    pub fn react(&self, state: &mut AppState, trigger: Trigger) -> Reaction {
        match trigger {
            Trigger::NewLead(lead) => self.register_new_lead(state, lead),
            Trigger::Interaction(interaction) => self.record_interaction(state, interaction),
            Trigger::TrainingCompleted { module } => self.complete_training(state, &module),
            Trigger::AiAction { module, label } => self.log_ai_action(state, module, &label),
        }
    }

    /// Admit a lead: assign it, reward the finder, fire the welcome email
    pub fn register_new_lead(&self, state: &mut AppState, mut lead: Lead) -> Reaction {
        let mut reaction = Reaction::default();

        self.log(
            state,
            &mut reaction,
            ModuleId::LeadFinder,
            format!("Found new lead: {}", lead.name()),
            Impact::Positive,
        );

        let owner = state.user().id().clone();
        lead.admit(&owner);

        self.score(state, &mut reaction, ScoreEvent::LeadFound);
        if lead.has_phone() {
            self.score(state, &mut reaction, ScoreEvent::LeadPhoneBonus);
            self.log(
                state,
                &mut reaction,
                ModuleId::LeadFinder,
                format!(
                    "Bonus: High Value Lead (Phone Found) +{} pts",
                    ScoreEvent::LeadPhoneBonus.score_delta()
                ),
                Impact::Positive,
            );
        }

        let recipient = lead.email().filter(|e| !e.is_empty()).unwrap_or("N/A");
        self.log(
            state,
            &mut reaction,
            ModuleId::Marketing,
            format!("Auto-sent Welcome Email to {}", recipient),
            Impact::Neutral,
        );

        state.push_lead(lead.clone());
        reaction.admitted_lead = Some(lead);
        reaction
    }

    /// Record a contact attempt and branch on its outcome
    pub fn record_interaction(&self, state: &mut AppState, interaction: Interaction) -> Reaction {
        let mut reaction = Reaction::default();
        let outcome = interaction.outcome();

        self.log(
            state,
            &mut reaction,
            ModuleId::Crm,
            format!(
                "Recorded {} with {}: {}",
                interaction.kind(),
                interaction.lead_id(),
                outcome
            ),
            outcome.impact(),
        );

        let matched = state.find_lead(interaction.lead_id()).is_some();
        reaction.lead_matched = Some(matched);

        self.score(state, &mut reaction, ScoreEvent::for_outcome(outcome));

        match outcome {
            Outcome::Success => {
                if let Some(lead) = state.lead_mut(interaction.lead_id()) {
                    lead.convert();
                }
            }
            Outcome::Failure => {
                let training = ScoringMatrix::remedial_training(interaction.kind());
                if state.user_mut().enqueue_training(training) {
                    reaction.training_assigned = Some(training.to_string());
                }
                self.log(
                    state,
                    &mut reaction,
                    ModuleId::Coaching,
                    format!("Performance Flagged! Assigned Training: {}", training),
                    Impact::Negative,
                );
            }
            Outcome::Neutral => {}
        }

        state.prepend_interaction(interaction);
        reaction
    }

    /// Close out a training module. Scores even if it was not pending.
    pub fn complete_training(&self, state: &mut AppState, module: &str) -> Reaction {
        let mut reaction = Reaction::default();

        self.log(
            state,
            &mut reaction,
            ModuleId::Coaching,
            format!("Completed Training: {}", module),
            Impact::Positive,
        );
        self.score(state, &mut reaction, ScoreEvent::TrainingCompleted);
        reaction.training_removed = state.user_mut().dequeue_training(module);

        reaction
    }

    /// Credit an AI-assisted task to the operator
    pub fn log_ai_action(&self, state: &mut AppState, module: ModuleId, label: &str) -> Reaction {
        let mut reaction = Reaction::default();

        self.log(
            state,
            &mut reaction,
            module,
            format!("AI Task Completed: {}", label),
            Impact::Positive,
        );
        self.score(state, &mut reaction, ScoreEvent::AiTaskCompleted);
        state.user_mut().record_ai_task();

        reaction
    }

    // ========== Helpers ==========

    fn score(&self, state: &mut AppState, reaction: &mut Reaction, event: ScoreEvent) {
        let user = state.user_mut();
        user.adjust_score(event.score_delta());
        user.credit_wallet(event.wallet_delta());
        reaction.score_delta += event.score_delta();
        reaction.wallet_delta += event.wallet_delta();
    }

    fn log(
        &self,
        state: &mut AppState,
        reaction: &mut Reaction,
        module: ModuleId,
        action: String,
        impact: Impact,
    ) {
        let entry = SystemLog::new(
            LogId::new(self.ids.next_id("log")),
            self.clock.now(),
            module,
            action,
            impact,
        );
        state.append_log(entry);
        reaction.logs_written += 1;
    }
}
