use crate::{DocumentAudit, Result, ScrumPlan, SelectedFix, TeamMember};
use async_trait::async_trait;

/// The planning backend: everything the HTTP surface needs from the
/// hosted model gateway. One upstream call per operation, no retries.
#[async_trait]
pub trait SpecAnalyzer: Send + Sync {
    /// Generate the full Scrum plan for a document and team roster.
    async fn generate_plan(
        &self,
        document: &str,
        team: &[TeamMember],
        sprint_duration_weeks: u32,
    ) -> Result<ScrumPlan>;

    /// Audit the document for completeness and ambiguity.
    async fn validate_document(&self, document: &str) -> Result<DocumentAudit>;

    /// Rewrite the document with the selected fixes applied, returning the
    /// enhanced text.
    async fn apply_fixes(&self, document: &str, fixes: &[SelectedFix]) -> Result<String>;
}
