use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a form in the given guild.
pub async fn create_form(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::form::Model, DbErr> {
    let id = next_id();

    entity::form::ActiveModel {
        form_id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id.into()),
        title: ActiveValue::Set(format!("Form {}", id)),
        custom_id: ActiveValue::Set(format!("form-{}", id)),
    }
    .insert(db)
    .await
}

/// Adds a required short text input to a form at the given position.
pub async fn add_input(
    db: &DatabaseConnection,
    form_id: i32,
    position: i32,
    label: &str,
) -> Result<entity::form_input::Model, DbErr> {
    entity::form_input::ActiveModel {
        id: ActiveValue::NotSet,
        form_id: ActiveValue::Set(form_id),
        position: ActiveValue::Set(position),
        custom_id: ActiveValue::Set(format!("input-{}", next_id())),
        style: ActiveValue::Set(1),
        label: ActiveValue::Set(label.to_string()),
        placeholder: ActiveValue::Set(None),
        required: ActiveValue::Set(true),
        min_length: ActiveValue::Set(None),
        max_length: ActiveValue::Set(Some(1024)),
    }
    .insert(db)
    .await
}
