//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. Nothing in it is mutated after startup.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{archive::TranscriptArchive, guild::GuildContext};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - the archive and guild context are reference-counted trait objects
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared with the session store.
    pub db: DatabaseConnection,

    /// Transcript archive used by the export.
    pub archive: Arc<dyn TranscriptArchive>,

    /// Resolves guild owners and reads ticket channels on Discord.
    pub guilds: Arc<dyn GuildContext>,

    /// Upper bound on concurrent per-entity lookups within one request.
    pub export_concurrency: usize,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `archive` - Transcript archive client
    /// - `guilds` - Guild context resolver
    /// - `export_concurrency` - Per-entity lookup concurrency limit
    pub fn new(
        db: DatabaseConnection,
        archive: Arc<dyn TranscriptArchive>,
        guilds: Arc<dyn GuildContext>,
        export_concurrency: usize,
    ) -> Self {
        Self {
            db,
            archive,
            guilds,
            export_concurrency,
        }
    }
}
