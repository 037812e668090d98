//! Tag domain model.
//!
//! Tags are canned responses triggered by a keyword. A tag replies with either plain text
//! or an embed, selected by `use_embed`.

use sea_orm::DbErr;

use crate::{
    model::export::{EmbedDto, TagDto},
    server::{
        model::embed::{CustomEmbed, EmbedField},
        util::parse::parse_optional_snowflake,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: String,
    pub trigger: String,
    pub content: Option<String>,
    pub use_embed: bool,
    pub embed_id: Option<i32>,
    /// Set when the tag is registered as a guild slash command.
    pub application_command_id: Option<u64>,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.tag_id,
            trigger: entity.trigger,
            content: entity.content,
            use_embed: entity.use_embed,
            embed_id: entity.embed_id,
            application_command_id: parse_optional_snowflake(
                entity.application_command_id.as_deref(),
                "application_command_id",
            )?,
        })
    }

    /// Converts to the export shape.
    ///
    /// Exactly one of `content` and `embed` is set. An embed tag whose embed could not
    /// be resolved carries an empty embed.
    ///
    /// # Arguments
    /// - `embed` - The tag's embed with its fields, ignored unless `use_embed` is set
    pub fn into_dto(self, embed: Option<(CustomEmbed, Vec<EmbedField>)>) -> TagDto {
        let (content, embed) = if self.use_embed {
            let embed = embed
                .map(|(embed, fields)| embed.into_dto(fields))
                .unwrap_or_else(EmbedDto::default);
            (None, Some(embed))
        } else {
            (Some(self.content.unwrap_or_default()), None)
        };

        TagDto {
            id: self.id,
            trigger: self.trigger,
            use_guild_command: self.application_command_id.is_some(),
            content,
            use_embed: self.use_embed,
            embed,
        }
    }
}
