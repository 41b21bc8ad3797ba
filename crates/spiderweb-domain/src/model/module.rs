//! ModuleId - The menus of the dashboard
//!
//! ModuleId is a Value Object. Every audit entry is attributed to one
//! module, and every AI action lives under one.

/// The fixed set of application modules (menus)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModuleId {
    Dashboard,
    /// Menu 2 - places search
    LeadFinder,
    /// Menu 3 - interaction logging
    Crm,
    /// Menu 4
    Marketing,
    /// Menu 5 - training queue
    Coaching,
    /// Menu 6
    Projects,
    /// Menu 7
    Affiliates,
    /// Menu 8
    Chatbot,
    /// Menu 9
    Finance,
    /// Menu 10
    Settings,
    Mindmap,
    ContentAi,
    Analytics,
    Members,
}

impl ModuleId {
    /// Stable wire name (`lead_finder`, `content_ai`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "dashboard",
            ModuleId::LeadFinder => "lead_finder",
            ModuleId::Crm => "crm",
            ModuleId::Marketing => "marketing",
            ModuleId::Coaching => "coaching",
            ModuleId::Projects => "projects",
            ModuleId::Affiliates => "affiliates",
            ModuleId::Chatbot => "chatbot",
            ModuleId::Finance => "finance",
            ModuleId::Settings => "settings",
            ModuleId::Mindmap => "mindmap",
            ModuleId::ContentAi => "content_ai",
            ModuleId::Analytics => "analytics",
            ModuleId::Members => "members",
        }
    }

    /// Get the display name of this module
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "Dashboard",
            ModuleId::LeadFinder => "Lead Finder",
            ModuleId::Crm => "CRM",
            ModuleId::Marketing => "Marketing",
            ModuleId::Coaching => "Coaching",
            ModuleId::Projects => "Projects",
            ModuleId::Affiliates => "Affiliates",
            ModuleId::Chatbot => "Chatbot",
            ModuleId::Finance => "Finance",
            ModuleId::Settings => "Settings",
            ModuleId::Mindmap => "Mindmap",
            ModuleId::ContentAi => "Content AI",
            ModuleId::Analytics => "Analytics",
            ModuleId::Members => "Members",
        }
    }

    /// Get all modules in menu order
    pub fn all() -> &'static [ModuleId] {
        &[
            ModuleId::Dashboard,
            ModuleId::LeadFinder,
            ModuleId::Crm,
            ModuleId::Marketing,
            ModuleId::Coaching,
            ModuleId::Projects,
            ModuleId::Affiliates,
            ModuleId::Chatbot,
            ModuleId::Finance,
            ModuleId::Settings,
            ModuleId::Mindmap,
            ModuleId::ContentAi,
            ModuleId::Analytics,
            ModuleId::Members,
        ]
    }
}

impl core::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string names no known module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModule(pub String);

impl core::fmt::Display for UnknownModule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Unknown module: {}", self.0)
    }
}

impl std::error::Error for UnknownModule {}

impl core::str::FromStr for ModuleId {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleId::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownModule(s.to_string()))
    }
}
