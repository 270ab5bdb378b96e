//! Card collection endpoints

use api_types::card::{Card, CardNew, CardPatch};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn not_found(id: &str) -> ServerError {
    ServerError::NotFound(format!("card {id}"))
}

pub async fn list(State(state): State<ServerState>) -> Json<Vec<Card>> {
    Json(state.store.read().await.cards.clone())
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Card>, ServerError> {
    let db = state.store.read().await;
    db.cards
        .iter()
        .find(|card| card.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

/// Stores a new card under a freshly generated id.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CardNew>,
) -> Result<(StatusCode, Json<Card>), ServerError> {
    let card = Card::from_new(uuid::Uuid::new_v4().to_string(), payload);
    tracing::info!(id = %card.id, "card added");
    let saved = state
        .store
        .write(|db| {
            db.cards.push(card.clone());
            card
        })
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Replaces every field but the id.
pub async fn replace(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CardNew>,
) -> Result<Json<Card>, ServerError> {
    let replaced = state
        .store
        .write(|db| {
            let card = db.cards.iter_mut().find(|card| card.id == id)?;
            *card = Card::from_new(id.clone(), payload);
            Some(card.clone())
        })
        .await?;
    replaced.map(Json).ok_or_else(|| not_found(&id))
}

/// Merges the supplied fields into the stored card.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<CardPatch>,
) -> Result<Json<Card>, ServerError> {
    let updated = state
        .store
        .write(|db| {
            let card = db.cards.iter_mut().find(|card| card.id == id)?;
            card.apply(patch);
            Some(card.clone())
        })
        .await?;
    if let Some(card) = &updated {
        tracing::info!(id = %card.id, status = card.status.as_str(), "card updated");
    }
    updated.map(Json).ok_or_else(|| not_found(&id))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServerError> {
    let removed = state
        .store
        .write(|db| {
            let before = db.cards.len();
            db.cards.retain(|card| card.id != id);
            db.cards.len() != before
        })
        .await?;
    if removed {
        tracing::info!(%id, "card deleted");
        Ok(Json(serde_json::json!({})))
    } else {
        Err(not_found(&id))
    }
}
