use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    time::Duration,
};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{archive::ArchiveError, AppError},
    model::{
        export::GuildExport,
        ticket::{ChannelMessage, Transcript},
    },
    service::{archive::TranscriptArchive, export::ExportService, guild::GuildContext},
};

mod owner;
mod panels;

const GUILD_ID: &str = "123456789012345678";
const GUILD_ID_U64: u64 = 123456789012345678;
const OWNER_ID: u64 = 923456789012345678;

/// Guild context reporting a fixed owner for every guild.
struct StaticGuildContext {
    owner_id: u64,
}

#[async_trait]
impl GuildContext for StaticGuildContext {
    async fn owner_id(&self, _guild_id: u64) -> Result<u64, AppError> {
        Ok(self.owner_id)
    }

    async fn channel_messages(
        &self,
        _channel_id: u64,
        _limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        Ok(Vec::new())
    }
}

/// Archive holding transcripts in memory.
///
/// Tickets without a stored transcript report `NotFound`, tickets marked as failing
/// report an unexpected status. A blocking archive holds its worker thread for the
/// given time on every lookup.
#[derive(Clone, Default)]
struct MemoryArchive {
    transcripts: HashMap<i32, serde_json::Value>,
    failing: HashSet<i32>,
    blocking: Option<Duration>,
}

impl MemoryArchive {
    fn with_transcript(mut self, ticket_id: i32, transcript: serde_json::Value) -> Self {
        self.transcripts.insert(ticket_id, transcript);
        self
    }

    fn failing(mut self, ticket_id: i32) -> Self {
        self.failing.insert(ticket_id);
        self
    }

    fn blocking(mut self, duration: Duration) -> Self {
        self.blocking = Some(duration);
        self
    }
}

#[async_trait]
impl TranscriptArchive for MemoryArchive {
    async fn get_transcript(
        &self,
        guild_id: u64,
        ticket_id: i32,
    ) -> Result<Transcript, ArchiveError> {
        if let Some(duration) = self.blocking {
            std::thread::sleep(duration);
        }

        if self.failing.contains(&ticket_id) {
            return Err(ArchiveError::UnexpectedStatus {
                ticket_id,
                status: 500,
            });
        }

        self.transcripts
            .get(&ticket_id)
            .cloned()
            .map(Transcript)
            .ok_or(ArchiveError::NotFound {
                guild_id,
                ticket_id,
            })
    }
}

/// Exports `GUILD_ID` as its owner.
async fn export_as_owner(
    db: &DatabaseConnection,
    archive: &MemoryArchive,
) -> Result<GuildExport, AppError> {
    let guilds = StaticGuildContext { owner_id: OWNER_ID };

    ExportService::new(db.clone(), Arc::new(archive.clone()), Arc::new(guilds), 4)
        .export(GUILD_ID_U64, OWNER_ID)
        .await
}
