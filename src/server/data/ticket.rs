use sea_orm::{
    sea_query::{Query, SelectStatement},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::{HashMap, HashSet};

use crate::server::model::ticket::{CloseMetadata, Ticket, TicketQueryOptions};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a ticket of a guild by its ID
    ///
    /// Ticket IDs are only unique within a guild.
    pub async fn get(&self, guild_id: u64, ticket_id: i32) -> Result<Option<Ticket>, DbErr> {
        let ticket = entity::prelude::Ticket::find_by_id((ticket_id, guild_id.to_string()))
            .one(self.db)
            .await?;

        ticket.map(Ticket::from_entity).transpose()
    }

    /// Gets tickets matching the query options, ordered by ticket ID
    pub async fn get_by_options(&self, options: TicketQueryOptions) -> Result<Vec<Ticket>, DbErr> {
        let mut query = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(options.guild_id.to_string()));

        if let Some(user_id) = options.user_id {
            query = query.filter(entity::ticket::Column::UserId.eq(user_id.to_string()));
        }

        if let Some(open) = options.open {
            query = query.filter(entity::ticket::Column::Open.eq(open));
        }

        let tickets = query
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?;

        tickets.into_iter().map(Ticket::from_entity).collect()
    }

    /// Gets service ratings for the given tickets keyed by ticket ID
    ///
    /// Tickets that were never rated have no entry. Rows are selected through a subquery
    /// on the guild's tickets, so the number of bound parameters does not grow with the
    /// ticket list.
    pub async fn get_ratings(
        &self,
        guild_id: u64,
        ticket_ids: &[i32],
    ) -> Result<HashMap<i32, u8>, DbErr> {
        if ticket_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ratings = entity::prelude::ServiceRating::find()
            .filter(entity::service_rating::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::service_rating::Column::TicketId.in_subquery(guild_tickets(guild_id)))
            .all(self.db)
            .await?;

        let wanted: HashSet<i32> = ticket_ids.iter().copied().collect();

        ratings
            .into_iter()
            .filter(|r| wanted.contains(&r.ticket_id))
            .map(|r| {
                let rating = u8::try_from(r.rating)
                    .map_err(|e| DbErr::Custom(format!("Failed to parse rating: {}", e)))?;
                Ok((r.ticket_id, rating))
            })
            .collect()
    }

    /// Gets close reasons and closers for the given tickets keyed by ticket ID
    pub async fn get_close_metadata(
        &self,
        guild_id: u64,
        ticket_ids: &[i32],
    ) -> Result<HashMap<i32, CloseMetadata>, DbErr> {
        if ticket_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let reasons = entity::prelude::CloseReason::find()
            .filter(entity::close_reason::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::close_reason::Column::TicketId.in_subquery(guild_tickets(guild_id)))
            .all(self.db)
            .await?;

        let wanted: HashSet<i32> = ticket_ids.iter().copied().collect();

        reasons
            .into_iter()
            .filter(|r| wanted.contains(&r.ticket_id))
            .map(|r| Ok((r.ticket_id, CloseMetadata::from_entity(r)?)))
            .collect()
    }
}

/// Selects the IDs of every ticket in a guild.
fn guild_tickets(guild_id: u64) -> SelectStatement {
    Query::select()
        .column(entity::ticket::Column::Id)
        .from(entity::ticket::Entity)
        .and_where(entity::ticket::Column::GuildId.eq(guild_id.to_string()))
        .to_owned()
}
