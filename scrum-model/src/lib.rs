//! # scrum-model
//!
//! AI gateway integration for ScrumAgent: plan generation, document audit
//! and fix application over an OpenAI-compatible chat completion API.
//!
//! The [`gateway::GatewayClient`] implements [`scrum_core::SpecAnalyzer`];
//! the server only sees the trait.

pub mod gateway;
pub mod prompt;
pub mod response;

pub use gateway::{GatewayClient, GatewayConfig};
