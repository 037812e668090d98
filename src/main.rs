mod model;
mod server;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    service::{archive::HttpTranscriptArchive, guild::DiscordGuildContext},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let discord_http = startup::setup_discord_http(&config);

    let state = AppState::new(
        db,
        Arc::new(HttpTranscriptArchive::new(http_client, config.archive_url.clone())),
        Arc::new(DiscordGuildContext::new(discord_http)),
        config.export_concurrency,
    );

    let router = server::router::router().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
