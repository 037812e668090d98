use regex::{Captures, Regex};
use sea_orm::DatabaseConnection;
use std::{collections::HashMap, sync::LazyLock};

use crate::server::{
    data::ticket::TicketRepository,
    error::AppError,
    model::ticket::{TicketMessage, TicketView},
    service::guild::GuildContext,
};

/// Number of channel messages shown with an open ticket.
pub const TICKET_MESSAGE_LIMIT: u8 = 100;

static USER_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@(\d+)>").expect("user mention pattern is valid"));

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
    guilds: &'a dyn GuildContext,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection, guilds: &'a dyn GuildContext) -> Self {
        Self { db, guilds }
    }

    /// Gets an open ticket with the latest messages of its channel.
    ///
    /// A ticket ID unknown in the guild is reported as a guild mismatch.
    ///
    /// # Returns
    /// - `Ok(TicketView)` - The ticket with up to 100 messages, oldest first
    /// - `Err(AppError::Forbidden)` - The guild has no ticket with this ID
    /// - `Err(AppError::NotFound)` - The ticket is closed or has no channel
    /// - `Err(AppError)` - The database or Discord lookup failed
    pub async fn get_open_ticket(
        &self,
        guild_id: u64,
        ticket_id: i32,
    ) -> Result<TicketView, AppError> {
        let ticket = TicketRepository::new(self.db)
            .get(guild_id, ticket_id)
            .await?
            .ok_or_else(|| AppError::Forbidden("Guild ID doesn't match".to_string()))?;

        if !ticket.open {
            return Err(AppError::NotFound("Ticket does not exist".to_string()));
        }

        let Some(channel_id) = ticket.channel_id else {
            return Err(AppError::NotFound(
                "Ticket channel does not exist".to_string(),
            ));
        };

        let messages = self
            .guilds
            .channel_messages(channel_id, TICKET_MESSAGE_LIMIT)
            .await?
            .into_iter()
            .rev()
            .map(|message| TicketMessage {
                username: message.author,
                content: format_mentions(&message.content, &message.mentions),
            })
            .collect();

        Ok(TicketView { ticket, messages })
    }
}

/// Rewrites `<@id>` user mentions to `@username`.
///
/// Mentions of users missing from `usernames` are left as they are.
fn format_mentions(content: &str, usernames: &HashMap<u64, String>) -> String {
    USER_MENTION
        .replace_all(content, |caps: &Captures| {
            caps[1]
                .parse::<u64>()
                .ok()
                .and_then(|id| usernames.get(&id))
                .map(|name| format!("@{}", name))
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
