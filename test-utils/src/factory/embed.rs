//! Custom embed factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating custom embeds.
///
/// # Example
///
/// ```rust,ignore
/// let embed = EmbedFactory::new(&db, "987654321012345678")
///     .title("Welcome")
///     .author("Support Team")
///     .build()
///     .await?;
/// ```
pub struct EmbedFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    title: Option<String>,
    description: Option<String>,
    colour: i32,
    author_name: Option<String>,
    footer_text: Option<String>,
}

impl<'a> EmbedFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            title: None,
            description: Some("Support will be with you shortly.".to_string()),
            colour: 0x2ecc71,
            author_name: None,
            footer_text: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer_text = Some(text.into());
        self
    }

    pub async fn build(self) -> Result<entity::embed::Model, DbErr> {
        entity::embed::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            url: ActiveValue::Set(None),
            colour: ActiveValue::Set(self.colour),
            author_name: ActiveValue::Set(self.author_name),
            author_icon_url: ActiveValue::Set(None),
            author_url: ActiveValue::Set(None),
            image_url: ActiveValue::Set(None),
            thumbnail_url: ActiveValue::Set(None),
            footer_text: ActiveValue::Set(self.footer_text),
            footer_icon_url: ActiveValue::Set(None),
            timestamp: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an embed with default values in the given guild.
pub async fn create_embed(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::embed::Model, DbErr> {
    EmbedFactory::new(db, guild_id).build().await
}

/// Appends a field to an embed.
pub async fn add_field(
    db: &DatabaseConnection,
    embed_id: i32,
    name: &str,
    value: &str,
    inline: bool,
) -> Result<entity::embed_field::Model, DbErr> {
    entity::embed_field::ActiveModel {
        field_id: ActiveValue::NotSet,
        embed_id: ActiveValue::Set(embed_id),
        name: ActiveValue::Set(name.to_string()),
        value: ActiveValue::Set(value.to_string()),
        inline: ActiveValue::Set(inline),
    }
    .insert(db)
    .await
}
