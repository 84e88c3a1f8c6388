//! Cyrano: a dating communication coach.
//!
//! The crate bundles the onboarding quiz engine (question banks, scoring and
//! archetype classification), the conversation analysis client that delegates
//! to an LLM, and the account administration surface. Storage and the LLM are
//! reached through traits so the HTTP service can plug in its own adapters.

pub mod accounts;
pub mod analysis;
pub mod config;
pub mod error;
pub mod identity;
pub mod quiz;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;
