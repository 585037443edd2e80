use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::error::{ApiError, Result};
use super::AppState;
use crate::domain::{User, UserCreate};
use crate::error::UserError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/", get(profile))
}

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub name: String,
    pub email: String,
    pub pass: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub pass: String,
}

/// Profile view. The password never leaves the store boundary.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub uid: String,
    pub name: String,
    pub email: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            uid: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<&'static str>)> {
    state
        .user_client
        .register(UserCreate {
            name: body.name,
            email: body.email,
            pass: body.pass,
        })
        .await?;

    Ok((StatusCode::CREATED, Json("user is registered")))
}

async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<serde_json::Value>> {
    let token = state.user_client.login(body.email, body.pass).await?;
    Ok(Json(json!({ "token": token })))
}

async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>> {
    let user = authorized_user(&state, &headers).await?;
    Ok(Json(user.into()))
}

/// Resolves the `Authorization` header (the opaque token handed out by login)
/// to its user. Any failure collapses to 401 so the header contents are never
/// reflected back.
pub(super) async fn authorized_user(state: &AppState, headers: &HeaderMap) -> Result<User> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    match state.user_client.get_profile(token.to_string()).await {
        Ok(user) => Ok(user),
        Err(UserError::NotFound) => Err(ApiError::Unauthorized),
        Err(e) => Err(e.into()),
    }
}
