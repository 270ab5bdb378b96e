//! Dashboard and profile singletons

use api_types::{dashboard::AccountSummary, profile::Profile};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

pub async fn get_dashboard(State(state): State<ServerState>) -> Json<AccountSummary> {
    Json(state.store.read().await.dashboard.clone())
}

/// Replaces the account summary wholesale.
pub async fn put_dashboard(
    State(state): State<ServerState>,
    Json(payload): Json<AccountSummary>,
) -> Result<Json<AccountSummary>, ServerError> {
    let saved = state
        .store
        .write(|db| {
            db.dashboard = payload;
            db.dashboard.clone()
        })
        .await?;
    Ok(Json(saved))
}

pub async fn get_profile(State(state): State<ServerState>) -> Json<Profile> {
    Json(state.store.read().await.profile.clone())
}

pub async fn put_profile(
    State(state): State<ServerState>,
    Json(payload): Json<Profile>,
) -> Result<Json<Profile>, ServerError> {
    tracing::debug!(name = %payload.name, "profile updated");
    let saved = state
        .store
        .write(|db| {
            db.profile = payload;
            db.profile.clone()
        })
        .await?;
    Ok(Json(saved))
}
