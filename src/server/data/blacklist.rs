use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::util::parse::parse_sorted_snowflakes;

pub struct BlacklistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlacklistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets up to `limit` blacklisted user IDs of a guild in numeric order
    ///
    /// The page itself is cut in stored (text) order.
    pub async fn get_users(&self, guild_id: u64, limit: u64) -> Result<Vec<u64>, DbErr> {
        let users = entity::prelude::Blacklist::find()
            .filter(entity::blacklist::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::blacklist::Column::UserId)
            .limit(limit)
            .all(self.db)
            .await?;

        parse_sorted_snowflakes(users.iter().map(|u| u.user_id.as_str()), "user_id")
    }

    /// Gets every blacklisted role ID of a guild
    pub async fn get_roles(&self, guild_id: u64) -> Result<Vec<u64>, DbErr> {
        let roles = entity::prelude::RoleBlacklist::find()
            .filter(entity::role_blacklist::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?;

        parse_sorted_snowflakes(roles.iter().map(|r| r.role_id.as_str()), "role_id")
    }
}
