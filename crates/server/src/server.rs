use axum::{Router, routing::get};

use std::sync::Arc;

use crate::{Store, account, cards, transactions};

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<Store>,
}

/// json-server compatible routes. There is no authentication layer.
pub fn router(store: Arc<Store>) -> Router {
    Router::new()
        .route(
            "/dashboard",
            get(account::get_dashboard).put(account::put_dashboard),
        )
        .route("/profile", get(account::get_profile).put(account::put_profile))
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route("/cards", get(cards::list).post(cards::create))
        .route(
            "/cards/{id}",
            get(cards::get)
                .put(cards::replace)
                .patch(cards::update)
                .delete(cards::remove),
        )
        .with_state(ServerState { store })
}

pub async fn run_with_listener(
    store: Store,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(store))).await
}

pub fn spawn_with_listener(
    store: Store,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(store, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
