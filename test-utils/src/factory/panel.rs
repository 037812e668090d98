//! Panel factory and helpers for panel side tables.
//!
//! Panels get a unique message ID and custom ID per factory call so that several panels
//! can live in one guild.

use crate::factory::helpers::{next_id, next_snowflake};
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test panels with customizable fields.
///
/// Defaults are sourced from `fixture::panel::entity_builder()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::panel::PanelFactory;
///
/// let panel = PanelFactory::new(&db, "987654321012345678")
///     .title("Appeals")
///     .welcome_message_id(Some(embed.id))
///     .build()
///     .await?;
/// ```
pub struct PanelFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::panel::Model,
}

impl<'a> PanelFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        let entity = fixture::panel::entity_builder()
            .guild_id(guild_id)
            .message_id(next_snowflake())
            .title(format!("Panel {}", id))
            .custom_id(format!("panel-{}", id))
            .build();

        Self { db, entity }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.entity.message_id = message_id.into();
        self
    }

    pub fn emoji(mut self, name: Option<&str>, id: Option<&str>) -> Self {
        self.entity.emoji_name = name.map(str::to_string);
        self.entity.emoji_id = id.map(str::to_string);
        self
    }

    pub fn welcome_message_id(mut self, embed_id: Option<i32>) -> Self {
        self.entity.welcome_message_id = embed_id;
        self
    }

    pub fn naming_scheme(mut self, naming_scheme: Option<&str>) -> Self {
        self.entity.naming_scheme = naming_scheme.map(str::to_string);
        self
    }

    /// Builds and inserts the panel, letting the database assign its ID.
    pub async fn build(self) -> Result<entity::panel::Model, DbErr> {
        let mut panel: entity::panel::ActiveModel = self.entity.into();
        panel.panel_id = ActiveValue::NotSet;

        panel.insert(self.db).await
    }
}

/// Creates a panel with default values in the given guild.
pub async fn create_panel(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::panel::Model, DbErr> {
    PanelFactory::new(db, guild_id).build().await
}

/// Sets whether the ticket opener is mentioned for tickets opened from the panel.
pub async fn set_user_mention(
    db: &DatabaseConnection,
    panel_id: i32,
    should_mention_user: bool,
) -> Result<entity::panel_user_mention::Model, DbErr> {
    entity::panel_user_mention::ActiveModel {
        panel_id: ActiveValue::Set(panel_id),
        should_mention_user: ActiveValue::Set(should_mention_user),
    }
    .insert(db)
    .await
}

pub async fn add_role_mention(
    db: &DatabaseConnection,
    panel_id: i32,
    role_id: impl Into<String>,
) -> Result<entity::panel_role_mention::Model, DbErr> {
    entity::panel_role_mention::ActiveModel {
        panel_id: ActiveValue::Set(panel_id),
        role_id: ActiveValue::Set(role_id.into()),
    }
    .insert(db)
    .await
}

pub async fn add_team(
    db: &DatabaseConnection,
    panel_id: i32,
    team_id: i32,
) -> Result<entity::panel_team::Model, DbErr> {
    entity::panel_team::ActiveModel {
        panel_id: ActiveValue::Set(panel_id),
        team_id: ActiveValue::Set(team_id),
    }
    .insert(db)
    .await
}

/// Appends an access-control rule to a panel.
///
/// # Arguments
/// - `action` - Either `"allow"` or `"deny"`
/// - `position` - Evaluation order, lowest first
pub async fn add_access_control_rule(
    db: &DatabaseConnection,
    panel_id: i32,
    role_id: impl Into<String>,
    action: &str,
    position: i32,
) -> Result<entity::panel_access_control_rule::Model, DbErr> {
    entity::panel_access_control_rule::ActiveModel {
        id: ActiveValue::NotSet,
        panel_id: ActiveValue::Set(panel_id),
        role_id: ActiveValue::Set(role_id.into()),
        action: ActiveValue::Set(action.to_string()),
        position: ActiveValue::Set(position),
    }
    .insert(db)
    .await
}
