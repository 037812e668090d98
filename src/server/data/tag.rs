use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::tag::Tag;

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all tags of a guild ordered by tag ID
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<Tag>, DbErr> {
        let tags = entity::prelude::Tag::find()
            .filter(entity::tag::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::tag::Column::TagId)
            .all(self.db)
            .await?;

        tags.into_iter().map(Tag::from_entity).collect()
    }
}
