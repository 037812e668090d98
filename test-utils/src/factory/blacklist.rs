use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn add_user(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    user_id: impl Into<String>,
) -> Result<entity::blacklist::Model, DbErr> {
    entity::blacklist::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        user_id: ActiveValue::Set(user_id.into()),
    }
    .insert(db)
    .await
}

pub async fn add_role(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    role_id: impl Into<String>,
) -> Result<entity::role_blacklist::Model, DbErr> {
    entity::role_blacklist::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        role_id: ActiveValue::Set(role_id.into()),
    }
    .insert(db)
    .await
}
