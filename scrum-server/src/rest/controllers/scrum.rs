//! Planning endpoints: analyze and fix.

use axum::http::HeaderMap;
use axum::{Json, extract::State};
use scrum_core::{ScrumPlan, SelectedFix, SpecValidation, TeamMember, extract_project_title};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::ServerConfig;
use crate::rest::controllers::auth::authenticate;
use crate::rest::error::{ApiError, scrum_error_response};

#[derive(Clone)]
pub struct ScrumController {
    config: ServerConfig,
}

impl ScrumController {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

fn default_sprint_duration() -> u32 {
    2
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(alias = "cahier_de_charge")]
    pub document_content: Option<String>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    #[serde(alias = "sprint_length_days", default = "default_sprint_duration")]
    pub sprint_duration: u32,
    #[serde(default)]
    pub skip_analysis: bool,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub project_title: String,
    pub plan: ScrumPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<serde_json::Value>,
}

/// Turn a project title into a usable repository name.
fn repo_slug(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug.trim_matches('-').to_string();
    let mut cleaned = String::with_capacity(slug.len());
    for c in slug.chars() {
        if c == '-' && cleaned.ends_with('-') {
            continue;
        }
        cleaned.push(c);
    }
    if cleaned.is_empty() { "scrum-board".to_string() } else { cleaned }
}

pub async fn analyze(
    State(controller): State<ScrumController>,
    headers: HeaderMap,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let config = &controller.config;
    authenticate(&config.user_store, &config.tokens, &headers)?;

    let document = match req.document_content {
        Some(doc) if !doc.trim().is_empty() => doc,
        _ => return Err(ApiError::bad_request("Missing documentContent / cahier_de_charge")),
    };

    let expose = config.security.expose_error_details;
    let project_title = extract_project_title(&document);
    tracing::info!(%project_title, "analysis requested");

    let mut audit_message = None;
    if !req.skip_analysis {
        let audit = config
            .analyzer
            .validate_document(&document)
            .await
            .map_err(|e| scrum_error_response(e, expose))?;

        if !audit.ok {
            tracing::info!(
                suggestions = audit.suggestions.len(),
                "document rejected by audit, returning fix suggestions"
            );
            return Ok(Json(AnalyzeResponse {
                success: true,
                project_title,
                plan: ScrumPlan::from_audit(audit),
                github: None,
            }));
        }
        audit_message = audit.message;
    }

    let mut plan = config
        .analyzer
        .generate_plan(&document, &req.team_members, req.sprint_duration)
        .await
        .map_err(|e| scrum_error_response(e, expose))?;

    // Callers branch on the verdict, so a generated plan always carries one.
    plan.spec_validation = Some(SpecValidation { ok: true, message: audit_message });

    let dangling = plan.unknown_story_refs();
    if !dangling.is_empty() {
        tracing::warn!(ids = ?dangling, "plan references stories missing from the backlog");
    }

    let github = match &config.auto_board {
        Some(auto) => {
            let repo_name = repo_slug(&project_title);
            match config.board.create_board(&auto.token, &repo_name, &plan).await {
                Ok(summary) => {
                    tracing::info!(repo_url = %summary.repo_url, "board created");
                    Some(json!({ "ok": true, "board": summary }))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "board creation failed (non-blocking)");
                    Some(json!({ "ok": false, "error": e.to_string() }))
                }
            }
        }
        None => None,
    };

    Ok(Json(AnalyzeResponse { success: true, project_title, plan, github }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixRequest {
    #[serde(default)]
    pub fixes: Vec<SelectedFix>,
    pub original_document: Option<String>,
}

#[derive(Serialize)]
pub struct FixResponse {
    pub success: bool,
    pub message: String,
    pub spec_enhanced: String,
}

pub async fn fix(
    State(controller): State<ScrumController>,
    headers: HeaderMap,
    Json(req): Json<FixRequest>,
) -> Result<Json<FixResponse>, ApiError> {
    let config = &controller.config;
    authenticate(&config.user_store, &config.tokens, &headers)?;

    if req.fixes.is_empty() {
        return Err(ApiError::bad_request("Missing field: fixes"));
    }
    let document = match req.original_document {
        Some(doc) if !doc.trim().is_empty() => doc,
        _ => return Err(ApiError::bad_request("Missing field: originalDocument")),
    };

    let expose = config.security.expose_error_details;
    let enhanced = config
        .analyzer
        .apply_fixes(&document, &req.fixes)
        .await
        .map_err(|e| scrum_error_response(e, expose))?;

    Ok(Json(FixResponse {
        success: true,
        message: "Fixes applied to the document".to_string(),
        spec_enhanced: enhanced,
    }))
}
