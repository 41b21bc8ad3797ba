//! Autopilot - Background worker that keeps pressing AI buttons
//!
//! Every tick the planner picks a random module and a random action in
//! it, and the workspace runs it with origin `Autopilot`. The task runs
//! until its cancellation token fires or `max_ticks` is reached.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use spiderweb_domain::{Clock, IdGenerator, StateStore};
use spiderweb_shared::AutopilotConfig;
use spiderweb_usecase::{ActionOrigin, AutopilotPlanner, Workspace};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct AutopilotOptions {
    /// Time between ticks. The first tick fires one interval after start.
    pub interval: Duration,
    /// Stop on its own after this many ticks
    pub max_ticks: Option<u64>,
    /// Seed for reproducible action picks
    pub seed: Option<u64>,
}

impl Default for AutopilotOptions {
    fn default() -> Self {
        Self::from_config(&AutopilotConfig::default())
    }
}

impl AutopilotOptions {
    pub fn from_config(config: &AutopilotConfig) -> Self {
        Self {
            interval: config.interval(),
            max_ticks: None,
            seed: None,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A running autopilot
pub struct AutopilotHandle {
    cancel: CancellationToken,
    task: JoinHandle<u64>,
}

impl AutopilotHandle {
    /// Signal the task to stop. Idempotent.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Token that stops this autopilot when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled() || self.task.is_finished()
    }

    /// Wait for the task to end; returns the number of ticks it ran
    pub async fn join(self) -> Result<u64, JoinError> {
        self.task.await
    }

    /// Stop, then wait
    pub async fn shutdown(self) -> Result<u64, JoinError> {
        self.stop();
        self.join().await
    }
}

/// Start the autopilot on the current tokio runtime
pub fn spawn_autopilot<S, C, G>(
    workspace: Arc<Workspace<S, C, G>>,
    options: AutopilotOptions,
) -> AutopilotHandle
where
    S: StateStore + 'static,
    C: Clock + 'static,
    G: IdGenerator + 'static,
{
    let cancel = CancellationToken::new();
    let task_cancel = cancel.clone();

    info!(
        interval_ms = options.interval.as_millis() as u64,
        max_ticks = options.max_ticks,
        "Autopilot started"
    );
    let task = tokio::spawn(run_autopilot(workspace, options, task_cancel));

    AutopilotHandle { cancel, task }
}

async fn run_autopilot<S, C, G>(
    workspace: Arc<Workspace<S, C, G>>,
    options: AutopilotOptions,
    cancel: CancellationToken,
) -> u64
where
    S: StateStore,
    C: Clock,
    G: IdGenerator,
{
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut interval = tokio::time::interval(options.interval.max(MIN_INTERVAL));
    // Skip the first immediate tick.
    interval.tick().await;

    let mut ticks = 0u64;
    loop {
        if options.max_ticks.is_some_and(|max| ticks >= max) {
            debug!(ticks, "Autopilot reached its tick limit");
            break;
        }

        tokio::select! {
            _ = cancel.cancelled() => {
                break;
            }
            _ = interval.tick() => {
                let planner = AutopilotPlanner::new(workspace.catalog());
                let Some(action) = planner.plan(|n| rng.gen_range(0..n)) else {
                    warn!("AI catalog is empty, autopilot has nothing to run");
                    break;
                };

                match workspace.run_ai_action(action.id, ActionOrigin::Autopilot) {
                    Ok(run) => info!(
                        module = %run.module,
                        label = %run.label,
                        score_delta = run.reaction.score_delta,
                        "Autopilot ran AI action"
                    ),
                    Err(e) => warn!(error = %e, action = action.id, "Autopilot tick failed"),
                }
                ticks += 1;
            }
        }
    }

    info!(ticks, "Autopilot stopped");
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStateStore;
    use spiderweb_domain::{
        AppState, ManualClock, ReactionEngine, SequentialIds, Timestamp, User, UserId, UserRole,
    };
    use spiderweb_usecase::AUTOPILOT_PREFIX;

    type TestWorkspace = Workspace<InMemoryStateStore, ManualClock, SequentialIds>;

    fn workspace() -> Arc<TestWorkspace> {
        let user = User::new(UserId::new("u1"), "Alex Sales", UserRole::Staff)
            .with_score(100)
            .with_wallet(500);
        Arc::new(Workspace::new(
            InMemoryStateStore::new(AppState::new(user)),
            ReactionEngine::new(
                ManualClock::starting_at(Timestamp::from_millis(0)),
                SequentialIds::new(),
            ),
        ))
    }

    #[tokio::test]
    async fn test_runs_until_tick_limit() {
        let ws = workspace();
        let options = AutopilotOptions::default()
            .with_interval(Duration::from_millis(5))
            .with_max_ticks(3)
            .with_seed(7);

        let ticks = spawn_autopilot(Arc::clone(&ws), options)
            .join()
            .await
            .unwrap();

        assert_eq!(ticks, 3);
        let state = ws.snapshot().unwrap();
        assert_eq!(state.user().score(), 106);
        assert_eq!(state.user().ai_tasks_completed(), 3);
        let expected = format!("AI Task Completed: {}", AUTOPILOT_PREFIX);
        assert!(state.logs().iter().all(|log| log.action.starts_with(&expected)));
    }

    #[tokio::test]
    async fn test_stop_halts_further_ticks() {
        let ws = workspace();
        let options = AutopilotOptions::default().with_interval(Duration::from_secs(3600));

        let handle = spawn_autopilot(Arc::clone(&ws), options);
        handle.stop();
        assert!(handle.is_stopped());

        let ticks = handle.join().await.unwrap();
        assert_eq!(ticks, 0);
        assert!(ws.snapshot().unwrap().logs().is_empty());
    }

    #[tokio::test]
    async fn test_same_seed_same_actions() {
        async fn labels(seed: u64) -> Vec<String> {
            let ws = workspace();
            let options = AutopilotOptions::default()
                .with_interval(Duration::from_millis(2))
                .with_max_ticks(4)
                .with_seed(seed);
            spawn_autopilot(Arc::clone(&ws), options)
                .join()
                .await
                .unwrap();
            ws.snapshot()
                .unwrap()
                .logs()
                .iter()
                .map(|log| log.action.clone())
                .collect()
        }

        assert_eq!(labels(42).await, labels(42).await);
    }
}
