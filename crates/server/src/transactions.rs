//! Transaction log endpoints

use api_types::transaction::TransactionRecord;
use axum::{Json, extract::State, http::StatusCode};

use crate::{ServerError, server::ServerState};

/// Lists records in insertion order; clients sort for display.
pub async fn list(State(state): State<ServerState>) -> Json<Vec<TransactionRecord>> {
    Json(state.store.read().await.transactions.clone())
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionRecord>,
) -> Result<(StatusCode, Json<TransactionRecord>), ServerError> {
    tracing::info!(id = payload.id, kind = payload.kind.as_str(), "new transaction");
    let saved = state
        .store
        .write(|db| {
            db.transactions.push(payload.clone());
            payload
        })
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}
