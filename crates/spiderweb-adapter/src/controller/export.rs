//! Snapshot export
//!
//! camelCase JSON views of the state, shaped the way the dashboard
//! serializes it for display and for the ecosystem analysis prompt.

use serde::Serialize;

use spiderweb_domain::{
    AppState, GenerationMode, Interaction, Lead, LogStats, SystemLog, TextGenerator, User,
};
use spiderweb_usecase::AiCatalog;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotView<'a> {
    pub revision: u64,
    pub user: UserView<'a>,
    pub leads: Vec<LeadView<'a>>,
    pub interactions: Vec<InteractionView<'a>>,
    pub logs: Vec<LogView<'a>>,
    pub log_stats: LogStatsView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub role: &'static str,
    pub score: i64,
    pub wallet: i64,
    pub pending_training: &'a [String],
    pub ai_tasks_completed: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<&'a str>,
    pub status: &'static str,
    pub potential: u32,
    pub notes: &'a str,
    pub created_at: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionView<'a> {
    pub id: &'a str,
    pub lead_id: &'a str,
    pub user_id: &'a str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub outcome: &'static str,
    pub notes: &'a str,
    pub timestamp: u64,
    pub sentiment: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogView<'a> {
    pub id: &'a str,
    pub timestamp: u64,
    pub module: &'static str,
    pub action: &'a str,
    pub details: &'a str,
    pub impact: &'static str,
}

/// Impact tally over the retained audit trail
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStatsView {
    pub total_entries: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl<'a> From<&'a User> for UserView<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: user.id().as_str(),
            name: user.name(),
            role: user.role().as_str(),
            score: user.score(),
            wallet: user.wallet(),
            pending_training: user.pending_training(),
            ai_tasks_completed: user.ai_tasks_completed(),
        }
    }
}

impl<'a> From<&'a Lead> for LeadView<'a> {
    fn from(lead: &'a Lead) -> Self {
        Self {
            id: lead.id().as_str(),
            name: lead.name(),
            company: lead.company(),
            location: lead.location(),
            email: lead.email(),
            phone: lead.phone(),
            source: lead.source().as_str(),
            affiliate_id: lead.affiliate_id(),
            assigned_to: lead.assigned_to().map(|u| u.as_str()),
            status: lead.status().as_str(),
            potential: lead.potential(),
            notes: lead.notes(),
            created_at: lead.timestamp().as_millis(),
        }
    }
}

impl<'a> From<&'a Interaction> for InteractionView<'a> {
    fn from(interaction: &'a Interaction) -> Self {
        Self {
            id: interaction.id().as_str(),
            lead_id: interaction.lead_id().as_str(),
            user_id: interaction.user_id().as_str(),
            kind: interaction.kind().as_str(),
            outcome: interaction.outcome().as_str(),
            notes: interaction.notes(),
            timestamp: interaction.timestamp().as_millis(),
            sentiment: interaction.sentiment(),
        }
    }
}

impl<'a> From<&'a SystemLog> for LogView<'a> {
    fn from(log: &'a SystemLog) -> Self {
        Self {
            id: log.id.as_str(),
            timestamp: log.timestamp.as_millis(),
            module: log.module.as_str(),
            action: &log.action,
            details: &log.details,
            impact: log.impact.as_str(),
        }
    }
}

impl From<LogStats> for LogStatsView {
    fn from(stats: LogStats) -> Self {
        Self {
            total_entries: stats.total_entries,
            positive: stats.positive,
            negative: stats.negative,
            neutral: stats.neutral,
        }
    }
}

impl<'a> From<&'a AppState> for SnapshotView<'a> {
    fn from(state: &'a AppState) -> Self {
        Self {
            revision: state.revision(),
            user: state.user().into(),
            leads: state.leads().iter().map(Into::into).collect(),
            interactions: state.interactions().iter().map(Into::into).collect(),
            logs: state.logs().iter().map(Into::into).collect(),
            log_stats: state.logs().stats().into(),
        }
    }
}

/// Pretty JSON of the whole snapshot
pub fn to_json(state: &AppState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SnapshotView::from(state))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    id: &'static str,
    module: &'static str,
    label: &'static str,
    description: &'static str,
}

pub fn catalog_to_json(catalog: &AiCatalog) -> serde_json::Result<String> {
    let entries: Vec<_> = catalog
        .actions()
        .iter()
        .map(|a| CatalogEntry {
            id: a.id,
            module: a.module.as_str(),
            label: a.label,
            description: a.description,
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

/// Leads, KPI and interactions only; the audit trail stays out of the prompt
#[derive(Serialize)]
struct EcosystemState<'a> {
    leads: Vec<LeadView<'a>>,
    user: UserView<'a>,
    interactions: Vec<InteractionView<'a>>,
}

/// The "Master System Architect" analysis prompt for `GenerationMode::Ecosystem`
pub fn ecosystem_prompt(state: &AppState) -> serde_json::Result<String> {
    let system_state = serde_json::to_string(&EcosystemState {
        leads: state.leads().iter().map(Into::into).collect(),
        user: state.user().into(),
        interactions: state.interactions().iter().map(Into::into).collect(),
    })?;

    Ok(format!(
        "You are the Master System Architect of a \"Spider Web\" business ecosystem.\n\
         Analyze the following system state containing Leads, User Performance (KPI), and Interactions.\n\
         \n\
         Your Goal:\n\
         1. Identify bottlenecks in the flow (e.g., Leads not being called).\n\
         2. Evaluate Employee Performance based on the Scoring Matrix.\n\
         3. Suggest specific cross-module actions (e.g., \"Trigger Marketing for Segment B\").\n\
         \n\
         System State:\n\
         {}",
        system_state
    ))
}

/// Run the ecosystem analysis through a text generator
pub async fn analyze_ecosystem<G: TextGenerator>(generator: &G, state: &AppState) -> String {
    let mode = GenerationMode::Ecosystem;
    match ecosystem_prompt(state) {
        Ok(prompt) => generator.generate(&prompt, mode).await,
        Err(e) => {
            tracing::warn!(error = %e, "Could not serialize state for analysis");
            mode.fallback_text().to_string()
        }
    }
}
