//! Conversation analysis backed by a language model.

pub mod client;
pub mod domain;
pub mod prompt;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use client::{AnalysisProvider, AnthropicProvider, ProviderError};
pub use domain::{
    parse_report, AnalysisReport, AnalysisResponse, CreditsRemaining, Diagnosis,
    HealthyConversation,
};
pub use router::analysis_router;
pub use service::{AnalysisError, AnalysisService, MIN_CONVERSATION_CHARS};
