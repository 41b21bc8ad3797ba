//! spiderweb discover command

use clap::Args;
use tracing::info;

use crate::context::AppContext;

#[derive(Debug, Args)]
pub struct DiscoverCommand {
    /// What to look for, e.g. "restaurant"
    #[arg(short, long)]
    pub term: String,

    /// Where to look
    #[arg(short, long)]
    pub location: String,

    /// Admit every lead with a phone number into the CRM
    #[arg(long)]
    pub admit: bool,
}

impl DiscoverCommand {
    pub async fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let discovery = ctx.discovery()?;
        let leads = ctx
            .workspace
            .discover_leads(&discovery, &self.term, &self.location)
            .await;
        info!(
            term = %self.term,
            location = %self.location,
            found = leads.len(),
            "Discovery finished"
        );

        if !ctx.json {
            println!("Found {} lead(s) for {} in {}", leads.len(), self.term, self.location);
            for lead in &leads {
                println!(
                    "  {:<28} {:<16} {}",
                    lead.name(),
                    lead.phone().unwrap_or("-"),
                    lead.location()
                );
            }
        }

        if self.admit {
            for reaction in ctx.workspace.admit_discovered(leads)? {
                if let Some(lead) = &reaction.admitted_lead {
                    ctx.report(lead.name(), &reaction);
                }
            }
        }

        ctx.finish()
    }
}
