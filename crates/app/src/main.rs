use server::{Db, Store};

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "skybank={level},server={level}",
            level = settings.app.level
        ))
        .init();

    let store = match &settings.server.db_path {
        Some(path) => {
            tracing::info!("Opening store at {path}");
            Store::open(path).await?
        }
        None => {
            tracing::warn!("No db_path configured, store lives in memory");
            Store::in_memory(Db::seed())
        }
    };

    let bind = settings
        .server
        .bind
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    server::run_with_listener(store, listener).await?;

    Ok(())
}
