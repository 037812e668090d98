use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr};

/// Factory for creating tags. Defaults to a plain text tag.
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::tag::Model,
}

impl<'a> TagFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();

        Self {
            db,
            entity: entity::tag::Model {
                guild_id: guild_id.into(),
                tag_id: format!("tag{}", id),
                trigger: format!("tag{}", id),
                content: Some(format!("Tag {} content", id)),
                use_embed: false,
                embed_id: None,
                application_command_id: None,
            },
        }
    }

    pub fn tag_id(mut self, tag_id: impl Into<String>) -> Self {
        self.entity.tag_id = tag_id.into();
        self
    }

    pub fn content(mut self, content: Option<&str>) -> Self {
        self.entity.content = content.map(str::to_string);
        self
    }

    /// Makes the tag reply with the given embed instead of its content.
    pub fn embed(mut self, embed_id: Option<i32>) -> Self {
        self.entity.use_embed = true;
        self.entity.embed_id = embed_id;
        self
    }

    pub fn application_command_id(mut self, id: impl Into<String>) -> Self {
        self.entity.application_command_id = Some(id.into());
        self
    }

    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        let tag: entity::tag::ActiveModel = self.entity.into();
        tag.insert(self.db).await
    }
}

pub async fn create_tag(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db, guild_id).build().await
}

