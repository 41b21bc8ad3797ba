//! External collaborators - Lead discovery and text generation
//!
//! Both are asynchronous and both swallow their own failures: discovery
//! returns no leads, generation returns a fixed fallback string. The
//! reaction engine never calls them; callers hand their resolved
//! results to the engine.

use crate::model::lead::Lead;

/// How hard the text model should think
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationMode {
    /// Quick content and basic chat
    Fast,
    /// Complex strategy and coaching
    DeepStrategy,
    /// Pattern and anomaly analysis over business data
    DeepAnalysis,
    /// Whole-system review of leads, KPI and interactions
    Ecosystem,
    /// Code review and auto-fix
    CodeReview,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Fast => "fast",
            GenerationMode::DeepStrategy => "deep_strategy",
            GenerationMode::DeepAnalysis => "deep_analysis",
            GenerationMode::Ecosystem => "ecosystem",
            GenerationMode::CodeReview => "code_review",
        }
    }

    pub fn model_name(&self) -> &'static str {
        match self {
            GenerationMode::Fast => "gemini-2.5-flash",
            _ => "gemini-3-pro-preview",
        }
    }

    /// Reasoning token budget, if the mode thinks at all
    pub fn thinking_budget(&self) -> Option<u32> {
        match self {
            GenerationMode::Fast => None,
            _ => Some(32_768),
        }
    }

    /// Returned when the call succeeded but produced no text
    pub fn empty_response_text(&self) -> &'static str {
        match self {
            GenerationMode::Fast => "No response generated.",
            GenerationMode::DeepStrategy => "I couldn't generate a deep strategy.",
            GenerationMode::DeepAnalysis => "Analysis failed.",
            GenerationMode::Ecosystem => "Ecosystem analysis failed.",
            GenerationMode::CodeReview => "No fixes needed.",
        }
    }

    /// Returned when the call itself failed
    pub fn fallback_text(&self) -> &'static str {
        match self {
            GenerationMode::Fast => "Error generating content. Please check API key.",
            GenerationMode::DeepStrategy => {
                "The strategy engine encountered an error. Please try again."
            }
            GenerationMode::DeepAnalysis => "Could not perform deep analysis.",
            GenerationMode::Ecosystem => "Could not analyze ecosystem.",
            GenerationMode::CodeReview => "Could not analyze code.",
        }
    }
}

/// Lead discovery collaborator (places search)
pub trait LeadDiscovery: Send + Sync {
    /// Search for `term` around `location`. Failures yield an empty list.
    fn search(
        &self,
        term: &str,
        location: &str,
    ) -> impl core::future::Future<Output = Vec<Lead>> + Send;
}

/// Text generation collaborator (LLM completion)
pub trait TextGenerator: Send + Sync {
    /// Complete `prompt`. Failures yield `mode.fallback_text()`.
    fn generate(
        &self,
        prompt: &str,
        mode: GenerationMode,
    ) -> impl core::future::Future<Output = String> + Send;
}
