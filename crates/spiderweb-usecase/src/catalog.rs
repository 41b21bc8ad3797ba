//! AI Catalog - The AI actions each module offers
//!
//! Every AI button on the dashboard maps to an action id here. Running an
//! action resolves the id to its module and label, which is what the
//! engine logs.

use spiderweb_domain::ModuleId;

/// Id of the dashboard-wide auto-fix action, which has no menu entry
pub const AUTO_FIX_GLOBAL: &str = "auto_fix_global";

/// One AI action button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiAction {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub module: ModuleId,
}

/// An action id resolved to what gets logged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAction {
    pub module: ModuleId,
    pub label: String,
}

/// The AI action catalog
#[derive(Debug, Clone)]
pub struct AiCatalog {
    actions: Vec<AiAction>,
}

macro_rules! actions {
    ($($module:ident => [$(($id:literal, $label:literal, $desc:literal)),* $(,)?]),* $(,)?) => {
        vec![$($(AiAction {
            id: $id,
            label: $label,
            description: $desc,
            module: ModuleId::$module,
        },)*)*]
    };
}

impl AiCatalog {
    /// Create a catalog from an explicit action list
    pub fn new(actions: Vec<AiAction>) -> Self {
        Self { actions }
    }

    /// The dashboard's built-in catalog
    pub fn standard() -> Self {
        Self::new(actions![
            Dashboard => [
                ("d1", "AI Daily KPI Summary", "Analyze the last 24h of data"),
                ("d2", "AI Revenue Forecast", "Predict cash flow for the next 30 days"),
                ("d3", "AI Risk Analysis", "Flag operational gaps"),
                ("d4", "AI Full-Page Optimizer", "Scan and improve UX/UI in real time"),
            ],
            LeadFinder => [
                ("l1", "AI Deep Data Scan", "Find hidden customers by location"),
                ("l2", "AI Lead Scoring Filter", "Score customer potential"),
                ("l3", "AI Email/Phone Finder", "Retrieve business contact details"),
                ("l4", "AI Competitor Analysis", "Track competitor ad strategy"),
            ],
            Crm => [
                ("c1", "AI Call Recording & Notes", "Summarize VoIP calls automatically"),
                ("c2", "AI Closing Script", "Suggest closing lines in real time"),
                ("c3", "AI Smart Follow-up Scheduler", "Schedule follow-ups automatically"),
                ("c4", "AI Emotion Reader", "Read customer sentiment from voice"),
            ],
            Marketing => [
                ("m1", "AI SEO Article Writer", "Generate content every 5 minutes"),
                ("m2", "AI Illustration Generator", "Generative art for posts"),
                ("m3", "AI Viral Headlines", "Optimize ad title CTR"),
                ("m4", "AI Auto Booking", "Schedule multi-channel posts"),
            ],
            Coaching => [
                ("cg1", "AI Skill Gap Analysis", "Find staff knowledge gaps"),
                ("cg2", "AI Learning Path", "Personalize coaching lessons"),
                ("cg3", "AI KPI Grading", "Evaluate staff performance"),
                ("cg4", "AI Roleplay Simulator", "Rehearse hard conversations with AI"),
            ],
            Projects => [
                ("p1", "AI Task Allocation", "Distribute resources optimally"),
                ("p2", "AI Delay Forecast", "Warn about schedule slips"),
                ("p3", "AI Meeting Summary", "Turn voice into an action plan"),
                ("p4", "AI Code Fixer", "Check and fix code automatically"),
            ],
            Affiliates => [
                ("a1", "AI Fraud Guard", "Detect fake clicks and orders"),
                ("a2", "AI Commission Calculator", "Share profit automatically"),
                ("a3", "AI Campaign Suggestions", "Propose attractive commission rates"),
                ("a4", "AI KOL Finder", "Match brands with influencers"),
            ],
            Chatbot => [
                ("ch1", "AI Private Data Training", "Learn from company documents"),
                ("ch2", "AI 24/7 Support", "Answer and route automatically"),
                ("ch3", "AI Voice Assistant", "Voice-controlled virtual assistant"),
                ("ch4", "AI Conversation Analysis", "Grade consultation quality"),
            ],
            Finance => [
                ("r1", "AI PDF Report Export", "Produce polished reports"),
                ("r2", "AI Cost Cutter", "Find financial leaks"),
                ("r3", "AI Cashflow Forecast", "12-month cashflow forecast"),
                ("r4", "AI Period Comparison", "Year-over-year growth analysis"),
            ],
            Settings => [
                ("s1", "AI Auto Fix UI", "Repair display glitches"),
                ("s2", "AI Data Backup", "Multi-site backup"),
                ("s3", "AI Firewall Security", "Block DDoS attacks"),
                ("s4", "AI Database Optimizer", "Clean up and index stale data"),
            ],
            Analytics => [
                ("an1", "AI Deep Trend Analysis", "Analyze market trends in depth"),
                ("an2", "AI Predict Churn", "Forecast customer churn"),
                ("an3", "AI Customer Segmentation", "Segment customers automatically"),
                ("an4", "AI ROI Calculator", "Measure return on investment"),
            ],
            Mindmap => [
                ("mm1", "AI Generate Branch", "Grow new idea branches"),
                ("mm2", "AI Summarize Map", "Summarize the map as text"),
                ("mm3", "AI Expand Ideas", "Expand ideas from keywords"),
                ("mm4", "AI Auto-Structure", "Rearrange the map neatly"),
            ],
        ])
    }

    pub fn actions(&self) -> &[AiAction] {
        &self.actions
    }

    pub fn find(&self, id: &str) -> Option<&AiAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Modules that offer at least one action, in catalog order
    pub fn modules(&self) -> Vec<ModuleId> {
        let mut modules = Vec::new();
        for action in &self.actions {
            if !modules.contains(&action.module) {
                modules.push(action.module);
            }
        }
        modules
    }

    pub fn actions_for(&self, module: ModuleId) -> Vec<&AiAction> {
        self.actions.iter().filter(|a| a.module == module).collect()
    }

    /// Resolve an action id to the module and label it is logged under
    ///
    /// Unknown ids log as "Unknown Task" on the dashboard.
    pub fn resolve(&self, id: &str) -> ResolvedAction {
        if let Some(action) = self.find(id) {
            return ResolvedAction {
                module: action.module,
                label: action.label.to_string(),
            };
        }
        if id == AUTO_FIX_GLOBAL {
            return ResolvedAction {
                module: ModuleId::Settings,
                label: "Global System Auto-Fix".to_string(),
            };
        }
        ResolvedAction {
            module: ModuleId::Dashboard,
            label: "Unknown Task".to_string(),
        }
    }
}

impl Default for AiCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
