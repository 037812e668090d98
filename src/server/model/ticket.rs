//! Ticket domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::collections::HashMap;

use crate::{
    model::{
        export::TicketDto,
        ticket::{OpenTicketDto, TicketMessageDto, TicketViewDto},
    },
    server::util::parse::{parse_optional_snowflake, parse_snowflake},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: Option<u64>,
    pub user_id: u64,
    pub open: bool,
    pub open_time: DateTime<Utc>,
    pub panel_id: Option<i32>,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            channel_id: parse_optional_snowflake(entity.channel_id.as_deref(), "channel_id")?,
            user_id: parse_snowflake(&entity.user_id, "user_id")?,
            open: entity.open,
            open_time: entity.open_time,
            panel_id: entity.panel_id,
        })
    }

    pub fn into_dto(self) -> OpenTicketDto {
        OpenTicketDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            channel_id: self.channel_id.map(|id| id.to_string()),
            user_id: self.user_id.to_string(),
            open: self.open,
            open_time: self.open_time,
            panel_id: self.panel_id,
        }
    }
}

/// Filter for ticket queries. Unset fields do not restrict the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketQueryOptions {
    pub guild_id: u64,
    pub user_id: Option<u64>,
    pub open: Option<bool>,
}

impl TicketQueryOptions {
    /// Every ticket in the guild regardless of opener or state.
    pub fn for_guild(guild_id: u64) -> Self {
        Self {
            guild_id,
            user_id: None,
            open: None,
        }
    }
}

/// Why and by whom a ticket was closed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloseMetadata {
    pub reason: Option<String>,
    pub closed_by: Option<u64>,
}

impl CloseMetadata {
    pub fn from_entity(entity: entity::close_reason::Model) -> Result<Self, DbErr> {
        Ok(Self {
            reason: entity.close_reason,
            closed_by: parse_optional_snowflake(entity.closed_by.as_deref(), "closed_by")?,
        })
    }
}

/// Archived message log of a ticket, kept in the archive's own JSON format.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript(pub serde_json::Value);

/// Ticket with its transcript, rating and close metadata merged in.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTicket {
    pub ticket_id: i32,
    pub close: Option<CloseMetadata>,
    pub rating: Option<u8>,
    pub transcript: Transcript,
}

impl ExportTicket {
    pub fn into_dto(self) -> TicketDto {
        let close = self.close.unwrap_or_default();

        TicketDto {
            ticket_id: self.ticket_id,
            close_reason: close.reason,
            closed_by: close.closed_by.map(|id| id.to_string()),
            rating: self.rating,
            transcript: self.transcript.0,
        }
    }
}

/// Message read from a ticket channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMessage {
    pub author: String,
    pub content: String,
    /// Usernames of the users mentioned in the message, keyed by user ID.
    pub mentions: HashMap<u64, String>,
}

impl ChannelMessage {
    pub fn from_message(message: serenity::all::Message) -> Self {
        Self {
            author: message.author.name,
            content: message.content,
            mentions: message
                .mentions
                .into_iter()
                .map(|user| (user.id.get(), user.name))
                .collect(),
        }
    }
}

/// Ticket channel message prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketMessage {
    pub username: String,
    pub content: String,
}

/// Open ticket with its recent messages, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketView {
    pub ticket: Ticket,
    pub messages: Vec<TicketMessage>,
}

impl TicketView {
    pub fn into_dto(self) -> TicketViewDto {
        TicketViewDto {
            ticket: self.ticket.into_dto(),
            messages: self
                .messages
                .into_iter()
                .map(|message| TicketMessageDto {
                    username: message.username,
                    content: message.content,
                })
                .collect(),
        }
    }
}
