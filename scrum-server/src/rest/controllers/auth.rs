//! Account endpoints: register, login, me, logout.

use axum::http::{HeaderMap, StatusCode, header};
use axum::{Json, extract::State};
use scrum_auth::{AuthError, InMemoryUserStore, NewUser, TokenManager, User};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::rest::error::ApiError;

#[derive(Clone)]
pub struct AuthController {
    store: Arc<InMemoryUserStore>,
    tokens: Arc<TokenManager>,
}

impl AuthController {
    pub fn new(store: Arc<InMemoryUserStore>, tokens: Arc<TokenManager>) -> Self {
        Self { store, tokens }
    }
}

/// Resolve the Bearer token in `headers` to a live user.
pub(crate) fn authenticate(
    store: &InMemoryUserStore,
    tokens: &TokenManager,
    headers: &HeaderMap,
) -> Result<User, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingToken)?;

    let claims = tokens.verify(token)?;
    store.get(&claims.user_id).ok_or_else(|| AuthError::UnknownUser.into())
}

#[derive(Serialize)]
pub struct UserPayload {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserPayload {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: UserPayload,
}

pub async fn register(
    State(controller): State<AuthController>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let username = req.username.ok_or_else(|| ApiError::bad_request("Missing field: username"))?;
    let email = req.email.ok_or_else(|| ApiError::bad_request("Missing field: email"))?;
    let password = req.password.ok_or_else(|| ApiError::bad_request("Missing field: password"))?;

    let user = controller.store.register(NewUser { username, email, password })?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
            user: UserPayload::from(&user),
        }),
    ))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: UserPayload,
}

pub async fn login(
    State(controller): State<AuthController>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(ApiError::bad_request("Missing email or password"));
    };

    let user = controller.store.authenticate(&email, &password)?;
    let token = controller.tokens.issue(&user.id, &user.username)?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        user: UserPayload::from(&user),
    }))
}

#[derive(Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: UserPayload,
}

pub async fn me(
    State(controller): State<AuthController>,
    headers: HeaderMap,
) -> Result<Json<MeResponse>, ApiError> {
    let user = authenticate(&controller.store, &controller.tokens, &headers)?;
    Ok(Json(MeResponse { success: true, user: UserPayload::from(&user) }))
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Tokens are stateless, so logout only confirms the caller was valid.
pub async fn logout(
    State(controller): State<AuthController>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, ApiError> {
    authenticate(&controller.store, &controller.tokens, &headers)?;
    Ok(Json(LogoutResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    }))
}
