//! Offline collaborators
//!
//! No HTTP client ships with the system. Discovery replays a Places-shaped
//! response from disk and generation echoes the prompt back, tagged with
//! the model the mode would have used.

use std::path::Path;

use tracing::{debug, warn};

use spiderweb_domain::{Clock, GenerationMode, Lead, LeadDiscovery, TextGenerator};
use spiderweb_shared::Result;

use super::places::decode_places;
use super::system::SystemClock;

const BUNDLED_FIXTURE: &str = include_str!("../../fixtures/places_sample.json");

/// Lead discovery backed by a recorded Places response
#[derive(Debug, Clone)]
pub struct FixtureLeadDiscovery<C = SystemClock> {
    body: String,
    clock: C,
}

impl FixtureLeadDiscovery<SystemClock> {
    /// The sample response bundled with the crate
    pub fn bundled() -> Self {
        Self::new(BUNDLED_FIXTURE, SystemClock)
    }

    /// Load a recorded response from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let body = std::fs::read_to_string(path)?;
        Ok(Self::new(body, SystemClock))
    }
}

impl<C: Clock> FixtureLeadDiscovery<C> {
    pub fn new(body: impl Into<String>, clock: C) -> Self {
        Self {
            body: body.into(),
            clock,
        }
    }
}

impl<C: Clock> LeadDiscovery for FixtureLeadDiscovery<C> {
    async fn search(&self, term: &str, location: &str) -> Vec<Lead> {
        debug!(term, location, "Replaying places fixture");
        match decode_places(&self.body, location, self.clock.now()) {
            Ok(leads) => leads,
            Err(e) => {
                warn!(error = %e, "Places response could not be decoded");
                Vec::new()
            }
        }
    }
}

/// Text generation without a model behind it
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTextGenerator;

impl TextGenerator for OfflineTextGenerator {
    async fn generate(&self, prompt: &str, mode: GenerationMode) -> String {
        match prompt.lines().map(str::trim).find(|l| !l.is_empty()) {
            Some(first) => format!("[{}] {}", mode.model_name(), first),
            None => mode.empty_response_text().to_string(),
        }
    }
}
