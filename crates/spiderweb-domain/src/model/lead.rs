//! Lead - A prospective customer
//!
//! Leads arrive from the discovery collaborator as plain records and are
//! admitted into the CRM by the reaction engine. Only a successful
//! interaction moves a lead to `Converted`.

use super::time::Timestamp;
use super::user::UserId;

/// Unique identifier for a Lead
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeadId(String);

impl LeadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for LeadId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a lead was acquired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LeadSource {
    #[default]
    Organic,
    Affiliate,
    Ads,
    /// Stamped by the places search collaborator
    GooglePlaces,
}

impl LeadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Organic => "organic",
            LeadSource::Affiliate => "affiliate",
            LeadSource::Ads => "ads",
            LeadSource::GooglePlaces => "google_places",
        }
    }
}

/// Lifecycle of a lead
///
/// The engine only produces `New` and `Converted`. The rest are reserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Lost => "lost",
        }
    }
}

impl core::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lead - A prospective customer record
#[derive(Debug, Clone)]
pub struct Lead {
    id: LeadId,
    /// Display name
    name: String,
    company: String,
    location: String,
    email: Option<String>,
    phone: Option<String>,
    source: LeadSource,
    affiliate_id: Option<String>,
    /// User the lead is assigned to, set on admission
    assigned_to: Option<UserId>,
    status: LeadStatus,
    /// Lead potential score
    potential: u32,
    notes: String,
    created_at: Timestamp,
}

impl Lead {
    /// Create a new Lead with only a display name
    pub fn new(id: LeadId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            company: String::new(),
            location: String::new(),
            email: None,
            phone: None,
            source: LeadSource::default(),
            affiliate_id: None,
            assigned_to: None,
            status: LeadStatus::New,
            potential: 0,
            notes: String::new(),
            created_at: Timestamp::default(),
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_source(mut self, source: LeadSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_affiliate(mut self, affiliate_id: impl Into<String>) -> Self {
        self.affiliate_id = Some(affiliate_id.into());
        self
    }

    /// Builder: status as reported by the producer of the record
    pub fn with_status(mut self, status: LeadStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_potential(mut self, potential: u32) -> Self {
        self.potential = potential;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn created_at(mut self, at: Timestamp) -> Self {
        self.created_at = at;
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &LeadId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn source(&self) -> LeadSource {
        self.source
    }

    pub fn affiliate_id(&self) -> Option<&str> {
        self.affiliate_id.as_deref()
    }

    pub fn assigned_to(&self) -> Option<&UserId> {
        self.assigned_to.as_ref()
    }

    pub fn status(&self) -> LeadStatus {
        self.status
    }

    pub fn potential(&self) -> u32 {
        self.potential
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn timestamp(&self) -> Timestamp {
        self.created_at
    }

    /// A phone counts only when it is non-empty
    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|p| !p.is_empty())
    }

    // ========== Engine-only transitions ==========

    pub(crate) fn admit(&mut self, owner: &UserId) {
        self.assigned_to = Some(owner.clone());
        self.status = LeadStatus::New;
    }

    pub(crate) fn convert(&mut self) {
        self.status = LeadStatus::Converted;
    }
}

impl PartialEq for Lead {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Lead {}
