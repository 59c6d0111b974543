//! # scrum-core
//!
//! Core types and traits for the ScrumAgent planning service:
//!
//! - [`ScrumPlan`] and its parts - the plan contract shared with callers
//! - [`SpecAnalyzer`] - the planning backend abstraction
//! - [`ScrumError`] / [`Result`] - unified error handling
//! - document helpers ([`extract_project_title`])

mod analyzer;
mod document;
mod error;
mod types;

pub use analyzer::SpecAnalyzer;
pub use document::extract_project_title;
pub use error::{Result, ScrumError};
pub use types::{
    DocumentAudit, FixSuggestion, FixSuggestions, PlanSummary, Priority, ProposedFix, ScrumPlan,
    SelectedFix, SpecValidation, Sprint, SprintTask, TeamMember, UserStory,
};
