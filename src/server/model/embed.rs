//! Custom embed domain models shared by panel welcome messages and tags.

use chrono::{DateTime, Utc};

use crate::model::export::{EmbedAuthorDto, EmbedDto, EmbedFieldDto, EmbedFooterDto};

/// A stored custom embed without its fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomEmbed {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub colour: i32,
    pub author_name: Option<String>,
    pub author_icon_url: Option<String>,
    pub author_url: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub footer_text: Option<String>,
    pub footer_icon_url: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl CustomEmbed {
    pub fn from_entity(entity: entity::embed::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            url: entity.url,
            colour: entity.colour,
            author_name: entity.author_name,
            author_icon_url: entity.author_icon_url,
            author_url: entity.author_url,
            image_url: entity.image_url,
            thumbnail_url: entity.thumbnail_url,
            footer_text: entity.footer_text,
            footer_icon_url: entity.footer_icon_url,
            timestamp: entity.timestamp,
        }
    }

    /// Builds the export embed with the given fields attached.
    ///
    /// Author and footer blocks are only emitted when their text is set, since Discord
    /// rejects an author or footer without one.
    pub fn into_dto(self, fields: Vec<EmbedField>) -> EmbedDto {
        let author = self.author_name.map(|name| EmbedAuthorDto {
            name,
            icon_url: self.author_icon_url,
            url: self.author_url,
        });

        let footer = self.footer_text.map(|text| EmbedFooterDto {
            text,
            icon_url: self.footer_icon_url,
        });

        EmbedDto {
            title: self.title,
            description: self.description,
            url: self.url,
            colour: self.colour,
            author,
            image_url: self.image_url,
            thumbnail_url: self.thumbnail_url,
            footer,
            timestamp: self.timestamp,
            fields: fields.into_iter().map(EmbedField::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub field_id: i32,
    pub embed_id: i32,
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn from_entity(entity: entity::embed_field::Model) -> Self {
        Self {
            field_id: entity.field_id,
            embed_id: entity.embed_id,
            name: entity.name,
            value: entity.value,
            inline: entity.inline,
        }
    }

    pub fn into_dto(self) -> EmbedFieldDto {
        EmbedFieldDto {
            name: self.name,
            value: self.value,
            inline: self.inline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_author_and_footer_without_text() {
        let embed = CustomEmbed {
            author_icon_url: Some("https://cdn.example/icon.png".to_string()),
            footer_icon_url: Some("https://cdn.example/footer.png".to_string()),
            ..Default::default()
        };

        let dto = embed.into_dto(Vec::new());

        assert!(dto.author.is_none());
        assert!(dto.footer.is_none());
        assert!(dto.fields.is_empty());
    }

    #[test]
    fn keeps_field_order() {
        let fields = vec![
            EmbedField {
                field_id: 2,
                embed_id: 1,
                name: "First".to_string(),
                value: "a".to_string(),
                inline: true,
            },
            EmbedField {
                field_id: 1,
                embed_id: 1,
                name: "Second".to_string(),
                value: "b".to_string(),
                inline: false,
            },
        ];

        let dto = CustomEmbed::default().into_dto(fields);

        let names: Vec<_> = dto.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
