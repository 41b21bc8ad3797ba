//! AppState - The canonical snapshot the dashboard renders
//!
//! A snapshot is never edited in place by its readers. A state store
//! calls [`AppState::transition`] to produce the next snapshot, so a
//! reaction either lands completely or not at all.

use std::collections::VecDeque;

use super::interaction::Interaction;
use super::lead::{Lead, LeadId};
use super::system_log::{LogRing, SystemLog};
use super::user::User;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Bumped once per committed transition
    revision: u64,
    user: User,
    /// In admission order
    leads: Vec<Lead>,
    /// Newest first
    interactions: VecDeque<Interaction>,
    logs: LogRing,
}

impl AppState {
    /// Fresh session state for an operator
    pub fn new(user: User) -> Self {
        Self::with_log_capacity(user, super::system_log::DEFAULT_LOG_CAPACITY)
    }

    pub fn with_log_capacity(user: User, capacity: usize) -> Self {
        Self {
            revision: 0,
            user,
            leads: Vec::new(),
            interactions: VecDeque::new(),
            logs: LogRing::new(capacity),
        }
    }

    /// Run `f` against a copy and return the copy as the next revision
    pub fn transition<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> (AppState, R) {
        let mut next = self.clone();
        let out = f(&mut next);
        next.revision += 1;
        (next, out)
    }

    // ========== Getters ==========

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn interactions(&self) -> &VecDeque<Interaction> {
        &self.interactions
    }

    pub fn logs(&self) -> &LogRing {
        &self.logs
    }

    pub fn find_lead(&self, id: &LeadId) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id() == id)
    }

    // ========== Engine-only access ==========

    pub(crate) fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    pub(crate) fn push_lead(&mut self, lead: Lead) {
        self.leads.push(lead);
    }

    pub(crate) fn lead_mut(&mut self, id: &LeadId) -> Option<&mut Lead> {
        self.leads.iter_mut().find(|l| l.id() == id)
    }

    pub(crate) fn prepend_interaction(&mut self, interaction: Interaction) {
        self.interactions.push_front(interaction);
    }

    pub(crate) fn append_log(&mut self, entry: SystemLog) {
        self.logs.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::{UserId, UserRole};

    fn state() -> AppState {
        AppState::new(User::new(UserId::new("u1"), "Alex Sales", UserRole::Staff))
    }

    #[test]
    fn test_transition_leaves_original_untouched() {
        let before = state();
        let (after, _) = before.transition(|s| {
            s.push_lead(Lead::new(LeadId::new("l-001"), "Acme Co"));
        });

        assert!(before.leads().is_empty());
        assert_eq!(after.leads().len(), 1);
        assert_eq!(before.revision(), 0);
        assert_eq!(after.revision(), 1);
    }

    #[test]
    fn test_find_lead() {
        let (state, _) = state().transition(|s| {
            s.push_lead(Lead::new(LeadId::new("l-001"), "Acme Co"));
        });

        assert!(state.find_lead(&LeadId::new("l-001")).is_some());
        assert!(state.find_lead(&LeadId::new("l-404")).is_none());
    }
}
