//! Helpers for writing per-guild settings rows.
//!
//! Each settings concern is its own table, so each helper inserts a single row.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts the main settings row with every flag set to `flags`.
pub async fn set_settings(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    flags: bool,
    context_menu_permission_level: i16,
) -> Result<entity::guild_settings::Model, DbErr> {
    entity::guild_settings::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        hide_claim_button: ActiveValue::Set(flags),
        disable_open_command: ActiveValue::Set(flags),
        context_menu_permission_level: ActiveValue::Set(context_menu_permission_level),
        context_menu_add_sender: ActiveValue::Set(flags),
        store_transcripts: ActiveValue::Set(flags),
        use_threads: ActiveValue::Set(flags),
    }
    .insert(db)
    .await
}

pub async fn set_claim_settings(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    support_can_view: bool,
    support_can_type: bool,
) -> Result<entity::claim_settings::Model, DbErr> {
    entity::claim_settings::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        support_can_view: ActiveValue::Set(support_can_view),
        support_can_type: ActiveValue::Set(support_can_type),
    }
    .insert(db)
    .await
}

/// Inserts an auto-close policy. Durations are in nanoseconds as stored by the bot.
pub async fn set_auto_close(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    since_open_with_no_response: Option<i64>,
    since_last_message: Option<i64>,
    on_user_leave: Option<bool>,
) -> Result<entity::auto_close::Model, DbErr> {
    entity::auto_close::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        enabled: ActiveValue::Set(true),
        since_open_with_no_response: ActiveValue::Set(since_open_with_no_response),
        since_last_message: ActiveValue::Set(since_last_message),
        on_user_leave: ActiveValue::Set(on_user_leave),
    }
    .insert(db)
    .await
}

pub async fn set_ticket_permissions(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    attach_files: bool,
    embed_links: bool,
    add_reactions: bool,
) -> Result<entity::ticket_permissions::Model, DbErr> {
    entity::ticket_permissions::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        attach_files: ActiveValue::Set(attach_files),
        embed_links: ActiveValue::Set(embed_links),
        add_reactions: ActiveValue::Set(add_reactions),
    }
    .insert(db)
    .await
}

pub async fn set_colour(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    colour_id: i16,
    colour: i32,
) -> Result<entity::custom_colour::Model, DbErr> {
    entity::custom_colour::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id.into()),
        colour_id: ActiveValue::Set(colour_id),
        colour: ActiveValue::Set(colour),
    }
    .insert(db)
    .await
}

pub async fn set_welcome_message(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    message: &str,
) -> Result<entity::welcome_message::Model, DbErr> {
    entity::welcome_message::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        welcome_message: ActiveValue::Set(message.to_string()),
    }
    .insert(db)
    .await
}

pub async fn set_ticket_limit(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    limit: i16,
) -> Result<entity::ticket_limit::Model, DbErr> {
    entity::ticket_limit::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        limit: ActiveValue::Set(limit),
    }
    .insert(db)
    .await
}

pub async fn set_category(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    category_id: impl Into<String>,
) -> Result<entity::channel_category::Model, DbErr> {
    entity::channel_category::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        category_id: ActiveValue::Set(category_id.into()),
    }
    .insert(db)
    .await
}

pub async fn set_archive_channel(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    channel_id: Option<&str>,
) -> Result<entity::archive_channel::Model, DbErr> {
    entity::archive_channel::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        channel_id: ActiveValue::Set(channel_id.map(str::to_string)),
    }
    .insert(db)
    .await
}

pub async fn set_users_can_close(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    users_can_close: bool,
) -> Result<entity::users_can_close::Model, DbErr> {
    entity::users_can_close::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        users_can_close: ActiveValue::Set(users_can_close),
    }
    .insert(db)
    .await
}

pub async fn set_close_confirmation(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    confirm: bool,
) -> Result<entity::close_confirmation::Model, DbErr> {
    entity::close_confirmation::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        confirm: ActiveValue::Set(confirm),
    }
    .insert(db)
    .await
}

pub async fn set_feedback_enabled(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    feedback_enabled: bool,
) -> Result<entity::feedback_enabled::Model, DbErr> {
    entity::feedback_enabled::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        feedback_enabled: ActiveValue::Set(feedback_enabled),
    }
    .insert(db)
    .await
}

pub async fn set_naming_scheme(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    naming_scheme: &str,
) -> Result<entity::naming_scheme::Model, DbErr> {
    entity::naming_scheme::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        naming_scheme: ActiveValue::Set(naming_scheme.to_string()),
    }
    .insert(db)
    .await
}

pub async fn set_language(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    language: &str,
) -> Result<entity::active_language::Model, DbErr> {
    entity::active_language::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        language: ActiveValue::Set(language.to_string()),
    }
    .insert(db)
    .await
}
