use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Open ticket with the latest messages of its channel.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketViewDto {
    pub ticket: OpenTicketDto,
    /// Oldest message first.
    pub messages: Vec<TicketMessageDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OpenTicketDto {
    pub id: i32,
    pub guild_id: String,
    pub channel_id: Option<String>,
    pub user_id: String,
    pub open: bool,
    pub open_time: DateTime<Utc>,
    pub panel_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketMessageDto {
    pub username: String,
    /// Message text with user mentions rewritten to `@username`.
    pub content: String,
}
