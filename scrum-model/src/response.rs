//! Parsing of gateway reply content.
//!
//! Replies are instructed to be bare JSON, but models still wrap them in
//! markdown fences often enough that the fences are stripped defensively
//! before parsing.

use scrum_core::{DocumentAudit, Result, ScrumError, ScrumPlan};

/// Remove every ```json and ``` marker from the content and trim.
///
/// A reply without fences passes through unchanged apart from trimming, so
/// fenced and bare replies parse identically.
pub fn strip_markdown_fences(content: &str) -> String {
    content.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse the reply content as a [`ScrumPlan`] after fence stripping.
pub fn parse_plan(content: &str) -> Result<ScrumPlan> {
    let cleaned = strip_markdown_fences(content);
    serde_json::from_str(&cleaned).map_err(|e| {
        tracing::error!(content = %cleaned, "failed to parse plan reply");
        ScrumError::ModelFormat(e.to_string())
    })
}

/// Parse the reply content as a [`DocumentAudit`] after fence stripping.
pub fn parse_audit(content: &str) -> Result<DocumentAudit> {
    let cleaned = strip_markdown_fences(content);
    serde_json::from_str(&cleaned).map_err(|e| {
        tracing::error!(content = %cleaned, "failed to parse audit reply");
        ScrumError::ModelFormat(e.to_string())
    })
}
