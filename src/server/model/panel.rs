//! Panel and multi-panel domain models.
//!
//! A panel is the message and button members click to open a ticket. The export adds
//! derived data to each stored panel: who gets mentioned, which support teams handle it,
//! its welcome embed and its access-control list.

use sea_orm::DbErr;

use crate::{
    model::export::{AccessControlRuleDto, EmojiDto, MultiPanelDto, PanelDto},
    server::{
        model::embed::{CustomEmbed, EmbedField},
        util::parse::{parse_optional_snowflake, parse_snowflake},
    },
};

/// Mention token emitted for panels that ping the ticket opener.
pub const USER_MENTION_TOKEN: &str = "user";

/// Stored panel row.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub panel_id: i32,
    pub message_id: u64,
    pub channel_id: u64,
    pub guild_id: u64,
    pub title: String,
    pub content: String,
    pub colour: i32,
    pub target_category: u64,
    pub emoji_name: Option<String>,
    pub emoji_id: Option<u64>,
    pub welcome_message_id: Option<i32>,
    pub with_default_team: bool,
    pub custom_id: String,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub button_style: i16,
    pub button_label: String,
    pub form_id: Option<i32>,
    /// Panel level override, `None` when the guild default applies.
    pub naming_scheme: Option<String>,
    pub disabled: bool,
}

impl Panel {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Panel)` - Successfully converted panel
    /// - `Err(DbErr::Custom)` - One of the snowflake columns is not a valid u64
    pub fn from_entity(entity: entity::panel::Model) -> Result<Self, DbErr> {
        Ok(Self {
            panel_id: entity.panel_id,
            message_id: parse_snowflake(&entity.message_id, "message_id")?,
            channel_id: parse_snowflake(&entity.channel_id, "channel_id")?,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            title: entity.title,
            content: entity.content,
            colour: entity.colour,
            target_category: parse_snowflake(&entity.target_category, "target_category")?,
            emoji_name: entity.emoji_name,
            emoji_id: parse_optional_snowflake(entity.emoji_id.as_deref(), "emoji_id")?,
            welcome_message_id: entity.welcome_message_id,
            with_default_team: entity.with_default_team,
            custom_id: entity.custom_id,
            image_url: entity.image_url,
            thumbnail_url: entity.thumbnail_url,
            button_style: entity.button_style,
            button_label: entity.button_label,
            form_id: entity.form_id,
            naming_scheme: entity.naming_scheme,
            disabled: entity.disabled,
        })
    }
}

/// Panel row joined with its welcome message embed, if it has one.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelWithWelcomeMessage {
    pub panel: Panel,
    pub welcome_message: Option<CustomEmbed>,
}

impl PanelWithWelcomeMessage {
    pub fn from_entity(
        entity: entity::panel::Model,
        welcome_message: Option<entity::embed::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            panel: Panel::from_entity(entity)?,
            welcome_message: welcome_message.map(CustomEmbed::from_entity),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessControlAction {
    Allow,
    Deny,
}

impl AccessControlAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

/// A single rule in a panel's access-control list. Rules are evaluated in position order.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessControlRule {
    pub panel_id: i32,
    pub role_id: u64,
    pub action: AccessControlAction,
    pub position: i32,
}

impl AccessControlRule {
    pub fn from_entity(entity: entity::panel_access_control_rule::Model) -> Result<Self, DbErr> {
        let action = match entity.action.as_str() {
            "allow" => AccessControlAction::Allow,
            "deny" => AccessControlAction::Deny,
            other => {
                return Err(DbErr::Custom(format!(
                    "Unknown access control action: {}",
                    other
                )))
            }
        };

        Ok(Self {
            panel_id: entity.panel_id,
            role_id: parse_snowflake(&entity.role_id, "role_id")?,
            action,
            position: entity.position,
        })
    }

    pub fn into_dto(self) -> AccessControlRuleDto {
        AccessControlRuleDto {
            role_id: self.role_id.to_string(),
            action: self.action.as_str().to_string(),
        }
    }
}

/// Panel with every derived field resolved, ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPanel {
    pub panel: Panel,
    pub welcome_message: Option<(CustomEmbed, Vec<EmbedField>)>,
    pub mention_user: bool,
    pub role_mentions: Vec<u64>,
    pub teams: Vec<i32>,
    pub access_control_list: Vec<AccessControlRule>,
}

impl ExportPanel {
    /// Mention tokens in output order: the opener token first, then role IDs.
    pub fn mentions(&self) -> Vec<String> {
        let opener = self
            .mention_user
            .then(|| USER_MENTION_TOKEN.to_string());

        opener
            .into_iter()
            .chain(self.role_mentions.iter().map(|id| id.to_string()))
            .collect()
    }

    pub fn into_dto(self) -> PanelDto {
        let mentions = self.mentions();
        let panel = self.panel;

        PanelDto {
            panel_id: panel.panel_id,
            message_id: panel.message_id.to_string(),
            channel_id: panel.channel_id.to_string(),
            guild_id: panel.guild_id.to_string(),
            title: panel.title,
            content: panel.content,
            colour: panel.colour,
            category_id: panel.target_category.to_string(),
            custom_id: panel.custom_id,
            image_url: panel.image_url,
            thumbnail_url: panel.thumbnail_url,
            button_style: panel.button_style,
            button_label: panel.button_label,
            form_id: panel.form_id,
            with_default_team: panel.with_default_team,
            use_server_default_naming_scheme: panel.naming_scheme.is_none(),
            naming_scheme: panel.naming_scheme,
            disabled: panel.disabled,
            welcome_message: self
                .welcome_message
                .map(|(embed, fields)| embed.into_dto(fields)),
            use_custom_emoji: panel.emoji_id.is_some(),
            emote: EmojiDto {
                name: panel.emoji_name,
                id: panel.emoji_id.map(|id| id.to_string()),
            },
            mentions,
            teams: self.teams,
            access_control_list: self
                .access_control_list
                .into_iter()
                .map(AccessControlRule::into_dto)
                .collect(),
        }
    }
}

/// Stored multi-panel row.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPanel {
    pub id: i32,
    pub message_id: u64,
    pub channel_id: u64,
    pub guild_id: u64,
    pub title: String,
    pub content: String,
    pub colour: i32,
    pub select_menu: bool,
}

impl MultiPanel {
    pub fn from_entity(entity: entity::multi_panel::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            message_id: parse_snowflake(&entity.message_id, "message_id")?,
            channel_id: parse_snowflake(&entity.channel_id, "channel_id")?,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            title: entity.title,
            content: entity.content,
            colour: entity.colour,
            select_menu: entity.select_menu,
        })
    }

    /// Converts to the export shape with its member panel IDs attached.
    pub fn into_dto(self, panels: Vec<i32>) -> MultiPanelDto {
        MultiPanelDto {
            id: self.id,
            message_id: self.message_id.to_string(),
            channel_id: self.channel_id.to_string(),
            guild_id: self.guild_id.to_string(),
            title: self.title,
            content: self.content,
            colour: self.colour,
            select_menu: self.select_menu,
            panels,
        }
    }
}
