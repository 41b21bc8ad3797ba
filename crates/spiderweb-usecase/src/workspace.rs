//! Workspace - The dashboard's entry points
//!
//! Every operation is one engine reaction committed through one
//! `StateStore::apply`. The manual buttons and the autopilot both come in
//! through here, so both produce the same audit semantics.

use std::sync::Arc;

use spiderweb_domain::{
    AppState, Clock, IdGenerator, Interaction, Lead, LeadDiscovery, ModuleId, Reaction,
    ReactionEngine, StateStore, StoreError, Trigger,
};

use crate::autopilot::AUTOPILOT_PREFIX;
use crate::catalog::AiCatalog;

/// Who pressed the AI button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOrigin {
    Manual,
    Autopilot,
}

/// Result of running a catalog action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiActionRun {
    pub module: ModuleId,
    /// Label as logged, including any autopilot prefix
    pub label: String,
    pub reaction: Reaction,
}

/// Workspace service - store + engine + catalog
pub struct Workspace<S, C, G> {
    store: S,
    engine: ReactionEngine<C, G>,
    catalog: AiCatalog,
}

impl<S, C, G> Workspace<S, C, G>
where
    S: StateStore,
    C: Clock,
    G: IdGenerator,
{
    /// Create a new Workspace with the standard AI catalog
    pub fn new(store: S, engine: ReactionEngine<C, G>) -> Self {
        Self {
            store,
            engine,
            catalog: AiCatalog::standard(),
        }
    }

    /// Builder: replace the AI catalog
    pub fn with_catalog(mut self, catalog: AiCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &AiCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &ReactionEngine<C, G> {
        &self.engine
    }

    /// Read-only snapshot for rendering
    pub fn snapshot(&self) -> Result<Arc<AppState>, StoreError> {
        self.store.snapshot()
    }

    /// Apply any trigger as one state replacement
    pub fn dispatch(&self, trigger: Trigger) -> Result<Reaction, StoreError> {
        self.store.apply(|state| self.engine.react(state, trigger))
    }

    pub fn register_new_lead(&self, lead: Lead) -> Result<Reaction, StoreError> {
        self.dispatch(Trigger::NewLead(lead))
    }

    pub fn record_interaction(&self, interaction: Interaction) -> Result<Reaction, StoreError> {
        self.dispatch(Trigger::Interaction(interaction))
    }

    pub fn complete_training(&self, module: &str) -> Result<Reaction, StoreError> {
        self.dispatch(Trigger::TrainingCompleted {
            module: module.to_string(),
        })
    }

    pub fn log_ai_action(&self, module: ModuleId, label: &str) -> Result<Reaction, StoreError> {
        self.dispatch(Trigger::AiAction {
            module,
            label: label.to_string(),
        })
    }

    /// Run a catalog action by id
    pub fn run_ai_action(
        &self,
        action_id: &str,
        origin: ActionOrigin,
    ) -> Result<AiActionRun, StoreError> {
        let resolved = self.catalog.resolve(action_id);
        let label = match origin {
            ActionOrigin::Manual => resolved.label,
            ActionOrigin::Autopilot => format!("{}{}", AUTOPILOT_PREFIX, resolved.label),
        };

        let reaction = self.log_ai_action(resolved.module, &label)?;
        Ok(AiActionRun {
            module: resolved.module,
            label,
            reaction,
        })
    }

    /// Ask the discovery collaborator for leads. Nothing is admitted yet.
    pub async fn discover_leads<D: LeadDiscovery>(
        &self,
        discovery: &D,
        term: &str,
        location: &str,
    ) -> Vec<Lead> {
        discovery.search(term, location).await
    }

    /// Admit every discovered lead that has a phone, one reaction each
    pub fn admit_discovered(
        &self,
        leads: impl IntoIterator<Item = Lead>,
    ) -> Result<Vec<Reaction>, StoreError> {
        leads
            .into_iter()
            .filter(Lead::has_phone)
            .map(|lead| self.register_new_lead(lead))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiderweb_domain::{
        InteractionId, InteractionType, LeadId, LeadStatus, ManualClock, Outcome, SequentialIds,
        Timestamp, User, UserId, UserRole,
    };
    use std::sync::Mutex;

    struct TestStore {
        state: Mutex<Arc<AppState>>,
    }

    impl TestStore {
        fn new(user: User) -> Self {
            Self {
                state: Mutex::new(Arc::new(AppState::new(user))),
            }
        }
    }

    impl StateStore for TestStore {
        fn snapshot(&self) -> Result<Arc<AppState>, StoreError> {
            let guard = self.state.lock().map_err(|_| StoreError::Poisoned {
                operation: "snapshot",
            })?;
            Ok(Arc::clone(&guard))
        }

        fn apply<R, F>(&self, f: F) -> Result<R, StoreError>
        where
            F: FnOnce(&mut AppState) -> R,
        {
            let mut guard = self.state.lock().map_err(|_| StoreError::Poisoned {
                operation: "apply",
            })?;
            let (next, out) = guard.transition(f);
            *guard = Arc::new(next);
            Ok(out)
        }
    }

    struct FixedDiscovery(Vec<Lead>);

    impl LeadDiscovery for FixedDiscovery {
        async fn search(&self, _term: &str, _location: &str) -> Vec<Lead> {
            self.0.clone()
        }
    }

    fn workspace() -> Workspace<TestStore, ManualClock, SequentialIds> {
        let user = User::new(UserId::new("u1"), "Alex Sales", UserRole::Staff)
            .with_score(100)
            .with_wallet(500);
        Workspace::new(
            TestStore::new(user),
            ReactionEngine::new(
                ManualClock::starting_at(Timestamp::from_millis(0)),
                SequentialIds::new(),
            ),
        )
    }

    #[test]
    fn test_example_scenario() {
        let ws = workspace();

        let reaction = ws
            .register_new_lead(Lead::new(LeadId::new("acme"), "Acme Co").with_phone("555-1234"))
            .unwrap();
        let acme = reaction.admitted_lead.unwrap();

        let state = ws.snapshot().unwrap();
        assert_eq!(state.user().score(), 115);
        assert_eq!(state.leads().len(), 1);
        assert_eq!(state.logs().len(), 3);

        ws.record_interaction(Interaction::new(
            InteractionId::new("i-1"),
            acme.id().clone(),
            UserId::new("u1"),
            InteractionType::Call,
            Outcome::Success,
        ))
        .unwrap();

        let state = ws.snapshot().unwrap();
        assert_eq!(state.user().score(), 165);
        assert_eq!(state.user().wallet(), 550);
        assert_eq!(state.leads()[0].status(), LeadStatus::Converted);
        assert_eq!(state.interactions().len(), 1);
    }

    #[test]
    fn test_each_operation_is_one_revision() {
        let ws = workspace();

        ws.register_new_lead(Lead::new(LeadId::new("acme"), "Acme Co").with_phone("555-1234"))
            .unwrap();
        ws.complete_training("Writing Better Emails").unwrap();
        ws.log_ai_action(ModuleId::Crm, "notes").unwrap();

        assert_eq!(ws.store().revision().unwrap(), 3);
    }

    #[test]
    fn test_run_ai_action_manual() {
        let ws = workspace();

        let run = ws.run_ai_action("m3", ActionOrigin::Manual).unwrap();

        assert_eq!(run.module, ModuleId::Marketing);
        assert_eq!(run.label, "AI Viral Headlines");
        assert_eq!(run.reaction.score_delta, 2);
        let state = ws.snapshot().unwrap();
        assert_eq!(
            state.logs().latest().unwrap().action,
            "AI Task Completed: AI Viral Headlines"
        );
    }

    #[test]
    fn test_run_ai_action_autopilot_prefixes_label() {
        let ws = workspace();

        let run = ws.run_ai_action("cg4", ActionOrigin::Autopilot).unwrap();

        assert_eq!(run.label, "[AUTO-PILOT] AI Roleplay Simulator");
        let state = ws.snapshot().unwrap();
        assert_eq!(state.user().ai_tasks_completed(), 1);
        assert_eq!(state.user().score(), 102);
        assert_eq!(state.logs().latest().unwrap().module, ModuleId::Coaching);
    }

    #[tokio::test]
    async fn test_admit_discovered_skips_leads_without_phone() {
        let ws = workspace();
        let discovery = FixedDiscovery(vec![
            Lead::new(LeadId::new("p1"), "Pho 24").with_phone("028 1234 5678"),
            Lead::new(LeadId::new("p2"), "Silent Cafe").with_phone(""),
            Lead::new(LeadId::new("p3"), "Banh Mi Co").with_phone("028 8765 4321"),
        ]);

        let found = ws.discover_leads(&discovery, "restaurant", "Saigon").await;
        assert_eq!(found.len(), 3);

        let reactions = ws.admit_discovered(found).unwrap();
        assert_eq!(reactions.len(), 2);

        let state = ws.snapshot().unwrap();
        assert_eq!(state.leads().len(), 2);
        assert_eq!(state.user().score(), 130);
    }
}
