//! Dependency injection - Build the workspace from configuration

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use spiderweb_adapter::controller::to_json;
use spiderweb_adapter::gateway::{FixtureLeadDiscovery, SystemClock, UuidIds};
use spiderweb_adapter::repository::InMemoryStateStore;
use spiderweb_domain::{AppState, Reaction, ReactionEngine};
use spiderweb_shared::SpiderWebConfig;
use spiderweb_usecase::Workspace;

pub type AppWorkspace = Workspace<InMemoryStateStore, SystemClock, UuidIds>;

pub struct AppContext {
    pub config: SpiderWebConfig,
    pub workspace: Arc<AppWorkspace>,
    pub json: bool,
}

impl AppContext {
    /// Load configuration (defaults when no file is given) and wire the workspace
    pub fn load(config_path: Option<&Path>, json: bool) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => SpiderWebConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => SpiderWebConfig::default(),
        };
        Ok(Self::from_config(config, json))
    }

    pub fn from_config(config: SpiderWebConfig, json: bool) -> Self {
        let user = config.operator.to_user();
        info!(
            operator = user.name(),
            score = user.score(),
            wallet = user.wallet(),
            "Session opened"
        );

        let state = AppState::with_log_capacity(user, config.log_capacity);
        let workspace = Workspace::new(
            InMemoryStateStore::new(state),
            ReactionEngine::new(SystemClock, UuidIds),
        );

        Self {
            config,
            workspace: Arc::new(workspace),
            json,
        }
    }

    /// Lead discovery from the configured fixture, or the bundled sample
    pub fn discovery(&self) -> anyhow::Result<FixtureLeadDiscovery> {
        match &self.config.discovery_fixture {
            Some(path) => FixtureLeadDiscovery::from_file(path)
                .with_context(|| format!("Failed to read places fixture {}", path.display())),
            None => Ok(FixtureLeadDiscovery::bundled()),
        }
    }

    /// Log what a reaction did
    pub fn report(&self, what: &str, reaction: &Reaction) {
        if reaction.lead_matched == Some(false) {
            warn!(what, "Interaction references a lead that is not in the CRM");
        }
        info!(
            what,
            score_delta = reaction.score_delta,
            wallet_delta = reaction.wallet_delta,
            logs = reaction.logs_written,
            "Reaction applied"
        );
    }

    /// Print the final state: JSON snapshot, or a short summary
    pub fn finish(&self) -> anyhow::Result<()> {
        let state = self.workspace.snapshot()?;
        if self.json {
            println!("{}", to_json(&state)?);
            return Ok(());
        }

        let user = state.user();
        println!();
        println!("{} ({})", user.name(), user.role());
        println!("  Score: {}", user.score());
        println!("  Wallet: {}", user.wallet());
        println!("  AI tasks: {}", user.ai_tasks_completed());
        if !user.pending_training().is_empty() {
            println!("  Pending training: {}", user.pending_training().join(", "));
        }
        println!("  Leads: {}", state.leads().len());
        println!("  Interactions: {}", state.interactions().len());

        let stats = state.logs().stats();
        println!();
        println!(
            "Recent activity ({} of {}: {} positive, {} negative, {} neutral):",
            stats.total_entries.min(10),
            stats.total_entries,
            stats.positive,
            stats.negative,
            stats.neutral
        );
        for log in state.logs().recent(10) {
            println!("  [{}] {}", log.module.display_name(), log.action);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_config_file() {
        let ctx = AppContext::load(None, false).unwrap();
        let state = ctx.workspace.snapshot().unwrap();

        assert_eq!(state.user().name(), "Alex Sales");
        assert_eq!(state.user().score(), 100);
        assert_eq!(state.logs().capacity(), 50);
    }

    #[test]
    fn test_config_file_shapes_session() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "operator:\n  name: Lan Pham\n  score: 10\nlogCapacity: 5").unwrap();

        let ctx = AppContext::load(Some(file.path()), true).unwrap();
        let state = ctx.workspace.snapshot().unwrap();

        assert_eq!(state.user().name(), "Lan Pham");
        assert_eq!(state.user().score(), 10);
        assert_eq!(state.logs().capacity(), 5);
        assert!(ctx.json);
    }

    #[test]
    fn test_oversized_log_capacity_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"logCapacity": 200}}"#).unwrap();

        assert!(AppContext::load(Some(file.path()), false).is_err());
    }

    #[test]
    fn test_unvalidated_log_capacity_still_capped() {
        let mut config = SpiderWebConfig::default();
        config.log_capacity = 200;
        let ctx = AppContext::from_config(config, false);

        for _ in 0..60 {
            ctx.workspace
                .run_ai_action("d1", spiderweb_usecase::ActionOrigin::Manual)
                .unwrap();
        }

        let state = ctx.workspace.snapshot().unwrap();
        assert_eq!(state.logs().capacity(), 50);
        assert_eq!(state.logs().len(), 50);
        assert_eq!(state.logs().stats().positive, 50);
    }

    #[test]
    fn test_finish_prints_summary_with_stats() {
        let ctx = AppContext::from_config(SpiderWebConfig::default(), false);
        ctx.workspace
            .run_ai_action("d1", spiderweb_usecase::ActionOrigin::Manual)
            .unwrap();

        assert!(ctx.finish().is_ok());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = AppContext::load(Some(Path::new("/nonexistent/spiderweb.json")), false);
        assert!(err.is_err());
    }
}
