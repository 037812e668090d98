use crate::factory::helpers::{next_id, next_snowflake};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a multi-panel in the given guild with a unique message ID.
pub async fn create_multi_panel(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::multi_panel::Model, DbErr> {
    let id = next_id();

    entity::multi_panel::ActiveModel {
        id: ActiveValue::NotSet,
        message_id: ActiveValue::Set(next_snowflake()),
        channel_id: ActiveValue::Set(next_snowflake()),
        guild_id: ActiveValue::Set(guild_id.into()),
        title: ActiveValue::Set(format!("Multi-panel {}", id)),
        content: ActiveValue::Set("Pick the kind of help you need.".to_string()),
        colour: ActiveValue::Set(0x2ecc71),
        select_menu: ActiveValue::Set(false),
    }
    .insert(db)
    .await
}

/// Adds a panel to a multi-panel.
pub async fn add_target(
    db: &DatabaseConnection,
    multi_panel_id: i32,
    panel_id: i32,
) -> Result<entity::multi_panel_target::Model, DbErr> {
    entity::multi_panel_target::ActiveModel {
        multi_panel_id: ActiveValue::Set(multi_panel_id),
        panel_id: ActiveValue::Set(panel_id),
    }
    .insert(db)
    .await
}
