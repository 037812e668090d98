use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a support team without an on-call role.
pub async fn create_team(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    name: &str,
) -> Result<entity::support_team::Model, DbErr> {
    entity::support_team::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id.into()),
        name: ActiveValue::Set(name.to_string()),
        on_call_role_id: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

pub async fn add_member(
    db: &DatabaseConnection,
    team_id: i32,
    user_id: impl Into<String>,
) -> Result<entity::support_team_member::Model, DbErr> {
    entity::support_team_member::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        user_id: ActiveValue::Set(user_id.into()),
    }
    .insert(db)
    .await
}

pub async fn add_role(
    db: &DatabaseConnection,
    team_id: i32,
    role_id: impl Into<String>,
) -> Result<entity::support_team_role::Model, DbErr> {
    entity::support_team_role::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        role_id: ActiveValue::Set(role_id.into()),
    }
    .insert(db)
    .await
}
