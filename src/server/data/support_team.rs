use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{model::support_team::SupportTeam, util::parse::parse_sorted_snowflakes};

pub struct SupportTeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupportTeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all support teams of a guild ordered by ID
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<SupportTeam>, DbErr> {
        let teams = entity::prelude::SupportTeam::find()
            .filter(entity::support_team::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::support_team::Column::Id)
            .all(self.db)
            .await?;

        teams.into_iter().map(SupportTeam::from_entity).collect()
    }

    /// Gets the user IDs of a team's members
    pub async fn get_members(&self, team_id: i32) -> Result<Vec<u64>, DbErr> {
        let members = entity::prelude::SupportTeamMember::find()
            .filter(entity::support_team_member::Column::TeamId.eq(team_id))
            .all(self.db)
            .await?;

        parse_sorted_snowflakes(members.iter().map(|m| m.user_id.as_str()), "user_id")
    }

    /// Gets the role IDs whose holders count as team members
    pub async fn get_roles(&self, team_id: i32) -> Result<Vec<u64>, DbErr> {
        let roles = entity::prelude::SupportTeamRole::find()
            .filter(entity::support_team_role::Column::TeamId.eq(team_id))
            .all(self.db)
            .await?;

        parse_sorted_snowflakes(roles.iter().map(|r| r.role_id.as_str()), "role_id")
    }
}
