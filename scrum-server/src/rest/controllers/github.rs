//! GitHub endpoints: OAuth exchange and board creation.

use axum::http::HeaderMap;
use axum::{
    Json,
    extract::{Query, State},
};
use scrum_core::ScrumPlan;
use scrum_github::{AuthorizedUser, BoardSummary};
use serde::Deserialize;

use crate::ServerConfig;
use crate::rest::controllers::auth::authenticate;
use crate::rest::error::ApiError;

#[derive(Clone)]
pub struct GithubController {
    config: ServerConfig,
}

impl GithubController {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

#[derive(Deserialize)]
pub struct OauthQuery {
    pub action: Option<String>,
}

/// `?action=client-id` hands the OAuth app id to the browser.
pub async fn oauth_query(
    State(controller): State<GithubController>,
    Query(query): Query<OauthQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match query.action.as_deref() {
        Some("client-id") => Ok(Json(serde_json::json!({
            "clientId": controller.config.exchanger.client_id(),
        }))),
        _ => Err(ApiError::bad_request("Unknown action")),
    }
}

#[derive(Deserialize)]
pub struct ExchangeRequest {
    pub code: Option<String>,
}

/// Exchange an authorization code for a token and the user's identity.
pub async fn oauth_exchange(
    State(controller): State<GithubController>,
    Json(req): Json<ExchangeRequest>,
) -> Result<Json<AuthorizedUser>, ApiError> {
    let code = match req.code {
        Some(code) if !code.is_empty() => code,
        _ => return Err(ApiError::bad_request("Missing code")),
    };

    let user = controller.config.exchanger.exchange_code(&code).await?;
    Ok(Json(user))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRequest {
    pub access_token: Option<String>,
    pub repo_name: Option<String>,
    pub scrum_result: Option<ScrumPlan>,
}

/// Materialize a plan as a repository with issues and a project board.
pub async fn create_board(
    State(controller): State<GithubController>,
    headers: HeaderMap,
    Json(req): Json<BoardRequest>,
) -> Result<Json<BoardSummary>, ApiError> {
    let config = &controller.config;
    authenticate(&config.user_store, &config.tokens, &headers)?;

    let access_token = match req.access_token {
        Some(token) if !token.is_empty() => token,
        _ => return Err(ApiError::bad_request("Missing field: accessToken")),
    };
    let repo_name = match req.repo_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(ApiError::bad_request("Missing field: repoName")),
    };
    let plan = req
        .scrum_result
        .ok_or_else(|| ApiError::bad_request("Missing field: scrumResult"))?;

    let summary = config.board.create_board(&access_token, &repo_name, &plan).await?;
    Ok(Json(summary))
}
