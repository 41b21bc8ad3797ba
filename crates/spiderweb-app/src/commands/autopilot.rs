//! spiderweb autopilot command

use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use tracing::{info, warn};

use spiderweb_adapter::controller::{spawn_autopilot, AutopilotOptions};

use crate::context::AppContext;

#[derive(Debug, Args)]
pub struct AutopilotCommand {
    /// Number of actions to run before stopping
    #[arg(long, default_value_t = 5)]
    pub ticks: u64,

    /// Milliseconds between actions (defaults to the configured interval)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Seed for reproducible picks
    #[arg(long)]
    pub seed: Option<u64>,
}

impl AutopilotCommand {
    pub async fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        if !ctx.config.autopilot.enabled {
            warn!("Autopilot is disabled in the configuration");
            return ctx.finish();
        }

        let mut options =
            AutopilotOptions::from_config(&ctx.config.autopilot).with_max_ticks(self.ticks);
        if let Some(ms) = self.interval_ms {
            options = options.with_interval(Duration::from_millis(ms));
        }
        if let Some(seed) = self.seed {
            options = options.with_seed(seed);
        }

        let handle = spawn_autopilot(Arc::clone(&ctx.workspace), options);

        let cancel = handle.cancellation_token();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received Ctrl+C, stopping autopilot");
                cancel.cancel();
            }
        });

        let ticks = handle.join().await?;
        println!("Autopilot ran {} action(s)", ticks);

        ctx.finish()
    }
}
