//! API handlers

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::envelope::{Envelope, Rejection};
use crate::api::AppState;
use crate::assets::NewAsset;
use crate::types::{Asset, Environment, User};
use crate::Error;

/// Health check
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.envelope.environment(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: Environment,
}

/// Verify a credential pair and issue a session
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, Rejection> {
    let payload: LoginRequest = parse_body(&state.envelope, &body)?;

    let (email, password) = match (required(&payload.email), required(&payload.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            return Err(state
                .envelope
                .reject(Error::invalid_request("Email and password are required")))
        }
    };

    let session = state
        .authenticator
        .login(email, password)
        .await
        .map_err(|e| state.envelope.reject(e))?;

    Ok((
        StatusCode::OK,
        Json(SessionResponse {
            token: session.token,
            user: session.user,
        }),
    )
        .into_response())
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Create an account and issue a session
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, Rejection> {
    let payload: RegisterRequest = parse_body(&state.envelope, &body)?;

    let (email, password, name) = match (
        required(&payload.email),
        required(&payload.password),
        required(&payload.name),
    ) {
        (Some(email), Some(password), Some(name)) => (email, password, name),
        _ => {
            return Err(state.envelope.reject(Error::invalid_request(
                "Email, password, and name are required",
            )))
        }
    };

    let session = state
        .authenticator
        .register(email, password, name)
        .await
        .map_err(|e| state.envelope.reject(e))?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token: session.token,
            user: session.user,
        }),
    )
        .into_response())
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

/// List stored assets
pub async fn list_assets(State(state): State<AppState>) -> Result<Response, Rejection> {
    let assets = state
        .assets
        .list()
        .await
        .map_err(|e| state.envelope.reject(e))?;

    let total = assets.len();
    Ok((StatusCode::OK, Json(AssetListResponse { assets, total })).into_response())
}

#[derive(Debug, Serialize)]
pub struct AssetListResponse {
    pub assets: Vec<Asset>,
    pub total: usize,
}

/// Record a new asset
pub async fn create_asset(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, Rejection> {
    let payload: CreateAssetRequest = parse_body(&state.envelope, &body)?;

    let asset = state
        .assets
        .create(NewAsset { name: payload.name })
        .await
        .map_err(|e| state.envelope.reject(e))?;

    Ok((StatusCode::CREATED, Json(asset)).into_response())
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CreateAssetRequest {
    pub name: Option<String>,
}

/// Per-route fallback for unsupported methods
pub async fn method_not_allowed() -> Rejection {
    Rejection::method_not_allowed()
}

/// Parse a JSON request body. An absent body counts as `{}` so missing
/// fields, not malformed JSON, is what gets reported.
fn parse_body<T>(envelope: &Envelope, body: &Bytes) -> Result<T, Rejection>
where
    T: DeserializeOwned + Default,
{
    if body.is_empty() {
        return Ok(T::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| envelope.reject(Error::invalid_request(format!("Invalid JSON body: {e}"))))
}

/// Presence check: blank strings count as missing.
fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
