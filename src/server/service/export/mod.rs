//! Guild data export.
//!
//! An export is a complete snapshot of one guild: settings, panels, multi-panels, tickets
//! with transcripts, tags, blacklist, forms and staff teams. Every collection is read by
//! its own fetcher, and the fetchers run concurrently once the caller has been confirmed
//! as the guild owner. Fetchers that depend on earlier results (ticket IDs before ratings,
//! ratings before transcripts) run in fixed phases.
//!
//! Every fetcher and every query inside it runs as its own task, so lookups proceed in
//! parallel on the runtime's worker threads. The export is read-only and not
//! transactionally isolated. Any failing lookup aborts the whole export and cancels the
//! lookups still running; no partial snapshot is ever returned.

mod blacklist;
mod forms;
mod multi_panels;
mod panels;
mod settings;
mod staff_teams;
mod tags;
mod tickets;

#[cfg(test)]
mod test;

use futures::Future;
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::export::GuildExport,
    service::{archive::TranscriptArchive, guild::GuildContext},
    util::join::spawn_lookup,
};

/// Builds guild exports.
///
/// Holds owned handles so every fetcher can move a clone into its own task.
#[derive(Clone)]
pub struct ExportService {
    db: DatabaseConnection,
    archive: Arc<dyn TranscriptArchive>,
    guilds: Arc<dyn GuildContext>,
    /// Upper bound on concurrent per-entity lookups inside each fetcher.
    concurrency: usize,
}

impl ExportService {
    pub fn new(
        db: DatabaseConnection,
        archive: Arc<dyn TranscriptArchive>,
        guilds: Arc<dyn GuildContext>,
        concurrency: usize,
    ) -> Self {
        Self {
            db,
            archive,
            guilds,
            concurrency,
        }
    }

    /// Builds the export of a guild on behalf of a user.
    ///
    /// Only the guild owner may export. Ownership is checked before any guild data is
    /// read.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to export
    /// - `user_id` - Discord ID of the requesting user
    ///
    /// # Returns
    /// - `Ok(GuildExport)` - Fully materialized snapshot of the guild
    /// - `Err(AppError::AuthErr(AuthError::NotGuildOwner))` - The user does not own the guild
    /// - `Err(AppError)` - Resolving the owner or any data lookup failed
    pub async fn export(&self, guild_id: u64, user_id: u64) -> Result<GuildExport, AppError> {
        let owner_id = self.guilds.owner_id(guild_id).await?;
        if owner_id != user_id {
            return Err(AuthError::NotGuildOwner { guild_id, user_id }.into());
        }

        tracing::info!(guild_id, "Starting guild export");

        let (settings, multi_panels, panels, tickets, tags, blacklist, forms, staff_teams) = tokio::try_join!(
            spawn_lookup(self.clone().fetch_settings(guild_id)),
            spawn_lookup(self.clone().fetch_multi_panels(guild_id)),
            spawn_lookup(self.clone().fetch_panels(guild_id)),
            spawn_lookup(self.clone().fetch_tickets(guild_id)),
            spawn_lookup(self.clone().fetch_tags(guild_id)),
            spawn_lookup(self.clone().fetch_blacklist(guild_id)),
            spawn_lookup(self.clone().fetch_forms(guild_id)),
            spawn_lookup(self.clone().fetch_staff_teams(guild_id)),
        )?;

        tracing::info!(
            guild_id,
            panels = panels.len(),
            multi_panels = multi_panels.len(),
            tickets = tickets.len(),
            tags = tags.len(),
            forms = forms.len(),
            staff_teams = staff_teams.len(),
            "Finished guild export"
        );

        Ok(GuildExport {
            guild_id,
            settings,
            panels,
            multi_panels,
            tickets,
            tags,
            blacklist,
            forms,
            staff_teams,
        })
    }

    /// Runs one repository query as its own task against a clone of the connection pool.
    fn query<R, F, Fut>(&self, query: F) -> impl Future<Output = Result<R, AppError>>
    where
        F: FnOnce(DatabaseConnection) -> Fut,
        Fut: Future<Output = Result<R, DbErr>> + Send + 'static,
        R: Send + 'static,
    {
        let lookup = query(self.db.clone());

        spawn_lookup(async move { Ok(lookup.await?) })
    }
}
