//! Guild context lookups against Discord.

use async_trait::async_trait;
use serenity::{
    all::{ChannelId, GuildId},
    http::Http,
};
use std::sync::Arc;

use crate::server::{error::AppError, model::ticket::ChannelMessage};

/// Resolves facts about a guild that live on Discord rather than in the database.
#[async_trait]
pub trait GuildContext: Send + Sync {
    /// Returns the user ID of the guild's owner.
    async fn owner_id(&self, guild_id: u64) -> Result<u64, AppError>;

    /// Returns up to `limit` of the latest messages in a channel, newest first.
    async fn channel_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError>;
}

/// Guild context backed by the Discord REST API.
#[derive(Clone)]
pub struct DiscordGuildContext {
    http: Arc<Http>,
}

impl DiscordGuildContext {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl GuildContext for DiscordGuildContext {
    async fn owner_id(&self, guild_id: u64) -> Result<u64, AppError> {
        // GuildId panics on zero
        if guild_id == 0 {
            return Err(AppError::BadRequest("Invalid guild ID".to_string()));
        }

        let guild = self.http.get_guild(GuildId::new(guild_id)).await?;

        Ok(guild.owner_id.get())
    }

    async fn channel_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        if channel_id == 0 {
            return Err(AppError::BadRequest("Invalid channel ID".to_string()));
        }

        let messages = self
            .http
            .get_messages(ChannelId::new(channel_id), None, Some(limit))
            .await?;

        Ok(messages
            .into_iter()
            .map(ChannelMessage::from_message)
            .collect())
    }
}
