mod app;
mod client;
mod config;
mod error;
mod local_state;
mod logging;
mod ui;

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    logging::init(config.log_file.as_deref())?;
    tracing::info!(base_url = %config.base_url, "starting skybank tui");

    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}
