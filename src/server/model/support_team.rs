use sea_orm::DbErr;

use crate::{
    model::export::SupportTeamDto,
    server::util::parse::{parse_optional_snowflake, parse_snowflake},
};

/// Named group of staff assigned to panels.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportTeam {
    pub id: i32,
    pub guild_id: u64,
    pub name: String,
    pub on_call_role_id: Option<u64>,
}

impl SupportTeam {
    pub fn from_entity(entity: entity::support_team::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            name: entity.name,
            on_call_role_id: parse_optional_snowflake(
                entity.on_call_role_id.as_deref(),
                "on_call_role_id",
            )?,
        })
    }

    /// Converts to the export shape with the team's member users and roles.
    pub fn into_dto(self, users: Vec<u64>, roles: Vec<u64>) -> SupportTeamDto {
        SupportTeamDto {
            id: self.id,
            name: self.name,
            on_call_role_id: self.on_call_role_id.map(|id| id.to_string()),
            users: users.into_iter().map(|id| id.to_string()).collect(),
            roles: roles.into_iter().map(|id| id.to_string()).collect(),
        }
    }
}
