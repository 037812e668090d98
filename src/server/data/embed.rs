use sea_orm::{
    sea_query::Query, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::embed::{CustomEmbed, EmbedField};

pub struct EmbedRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmbedRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every custom embed of a guild keyed by embed ID
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<HashMap<i32, CustomEmbed>, DbErr> {
        let embeds = entity::prelude::Embed::find()
            .filter(entity::embed::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?;

        Ok(embeds
            .into_iter()
            .map(|e| (e.id, CustomEmbed::from_entity(e)))
            .collect())
    }

    /// Gets the fields of every embed in a guild keyed by embed ID
    ///
    /// Fields are kept in insertion order within each embed. Embeds without fields have no
    /// entry.
    pub async fn get_fields_by_guild(
        &self,
        guild_id: u64,
    ) -> Result<HashMap<i32, Vec<EmbedField>>, DbErr> {
        let guild_embeds = Query::select()
            .column(entity::embed::Column::Id)
            .from(entity::embed::Entity)
            .and_where(entity::embed::Column::GuildId.eq(guild_id.to_string()))
            .to_owned();

        let fields = entity::prelude::EmbedField::find()
            .filter(entity::embed_field::Column::EmbedId.in_subquery(guild_embeds))
            .order_by_asc(entity::embed_field::Column::EmbedId)
            .order_by_asc(entity::embed_field::Column::FieldId)
            .all(self.db)
            .await?;

        let mut by_embed: HashMap<i32, Vec<EmbedField>> = HashMap::new();
        for field in fields {
            by_embed
                .entry(field.embed_id)
                .or_default()
                .push(EmbedField::from_entity(field));
        }

        Ok(by_embed)
    }
}
