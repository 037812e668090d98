//! Ticket factory and helpers for ticket side tables.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets.
///
/// Ticket IDs are per guild in the bot's schema; the factory hands out unique IDs from
/// the shared counter unless one is set explicitly.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::ticket::Model,
}

impl<'a> TicketFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            entity: entity::ticket::Model {
                id: next_id() as i32,
                guild_id: guild_id.into(),
                channel_id: Some(next_snowflake()),
                user_id: next_snowflake(),
                open: false,
                open_time: Utc::now(),
                panel_id: None,
            },
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.entity.user_id = user_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: Option<&str>) -> Self {
        self.entity.channel_id = channel_id.map(str::to_string);
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.entity.open = open;
        self
    }

    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        let ticket: entity::ticket::ActiveModel = self.entity.into();
        ticket.insert(self.db).await
    }
}

/// Creates a closed ticket in the given guild.
pub async fn create_ticket(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, guild_id).build().await
}

pub async fn set_rating(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    ticket_id: i32,
    rating: i16,
) -> Result<entity::service_rating::Model, DbErr> {
    entity::service_rating::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        ticket_id: ActiveValue::Set(ticket_id),
        rating: ActiveValue::Set(rating),
    }
    .insert(db)
    .await
}

pub async fn set_close_reason(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    ticket_id: i32,
    reason: Option<&str>,
    closed_by: Option<&str>,
) -> Result<entity::close_reason::Model, DbErr> {
    entity::close_reason::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        ticket_id: ActiveValue::Set(ticket_id),
        close_reason: ActiveValue::Set(reason.map(str::to_string)),
        closed_by: ActiveValue::Set(closed_by.map(str::to_string)),
    }
    .insert(db)
    .await
}
