//! Guild settings domain models.
//!
//! Each settings concern lives in its own table and is read independently. Every model
//! implements `Default` with the value used when the guild has no row for that table.

use chrono::Duration;
use sea_orm::DbErr;
use std::collections::BTreeMap;

use crate::{
    model::export::{AutoCloseDto, ClaimSettingsDto, SettingsDto, TicketPermissionsDto},
    server::util::parse::{parse_optional_snowflake, parse_snowflake},
};

/// Welcome message used when the guild has not configured one.
pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Thank you for contacting support.\nPlease describe your issue and await a response.";

/// Ticket limit used when the stored limit is zero.
pub const DEFAULT_TICKET_LIMIT: u8 = 5;

/// General guild settings stored in the main settings row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuildSettings {
    pub hide_claim_button: bool,
    pub disable_open_command: bool,
    pub context_menu_permission_level: i16,
    pub context_menu_add_sender: bool,
    pub store_transcripts: bool,
    pub use_threads: bool,
}

impl GuildSettings {
    pub fn from_entity(entity: entity::guild_settings::Model) -> Self {
        Self {
            hide_claim_button: entity.hide_claim_button,
            disable_open_command: entity.disable_open_command,
            context_menu_permission_level: entity.context_menu_permission_level,
            context_menu_add_sender: entity.context_menu_add_sender,
            store_transcripts: entity.store_transcripts,
            use_threads: entity.use_threads,
        }
    }
}

/// Whether support staff keep access to a ticket after another member claims it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimSettings {
    pub support_can_view: bool,
    pub support_can_type: bool,
}

impl ClaimSettings {
    pub fn from_entity(entity: entity::claim_settings::Model) -> Self {
        Self {
            support_can_view: entity.support_can_view,
            support_can_type: entity.support_can_type,
        }
    }

    pub fn into_dto(self) -> ClaimSettingsDto {
        ClaimSettingsDto {
            support_can_view: self.support_can_view,
            support_can_type: self.support_can_type,
        }
    }
}

/// Automatic ticket closing policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoCloseSettings {
    pub enabled: bool,
    pub since_open_with_no_response: Option<Duration>,
    pub since_last_message: Option<Duration>,
    pub on_user_leave: Option<bool>,
}

impl AutoCloseSettings {
    /// Converts the stored row, whose durations are kept in nanoseconds.
    pub fn from_entity(entity: entity::auto_close::Model) -> Self {
        Self {
            enabled: entity.enabled,
            since_open_with_no_response: entity
                .since_open_with_no_response
                .map(Duration::nanoseconds),
            since_last_message: entity.since_last_message.map(Duration::nanoseconds),
            on_user_leave: entity.on_user_leave,
        }
    }

    /// Converts to the export shape, truncating durations to whole seconds.
    pub fn into_dto(self) -> AutoCloseDto {
        AutoCloseDto {
            enabled: self.enabled,
            since_open_with_no_response: self
                .since_open_with_no_response
                .map(|d| d.num_seconds())
                .unwrap_or(0),
            since_last_message: self
                .since_last_message
                .map(|d| d.num_seconds())
                .unwrap_or(0),
            on_user_leave: self.on_user_leave.unwrap_or(false),
        }
    }
}

/// Permissions granted to the ticket opener inside the ticket channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketPermissions {
    pub attach_files: bool,
    pub embed_links: bool,
    pub add_reactions: bool,
}

impl TicketPermissions {
    pub fn from_entity(entity: entity::ticket_permissions::Model) -> Self {
        Self {
            attach_files: entity.attach_files,
            embed_links: entity.embed_links,
            add_reactions: entity.add_reactions,
        }
    }

    pub fn into_dto(self) -> TicketPermissionsDto {
        TicketPermissionsDto {
            attach_files: self.attach_files,
            embed_links: self.embed_links,
            add_reactions: self.add_reactions,
        }
    }
}

/// Semantic colour roles the bot uses in its embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Colour {
    Green,
    Red,
    Orange,
    Lime,
    Blue,
}

/// Colours a guild can customise and that are included in exports.
pub const ACTIVE_COLOURS: [Colour; 2] = [Colour::Green, Colour::Red];

impl Colour {
    /// Stored colour ID.
    pub fn id(self) -> i16 {
        match self {
            Self::Green => 0,
            Self::Red => 1,
            Self::Orange => 2,
            Self::Lime => 3,
            Self::Blue => 4,
        }
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Green),
            1 => Some(Self::Red),
            2 => Some(Self::Orange),
            3 => Some(Self::Lime),
            4 => Some(Self::Blue),
            _ => None,
        }
    }

    /// Built-in RGB value used when the guild has not overridden the colour.
    pub fn default_rgb(self) -> HexColour {
        match self {
            Self::Green => HexColour(0x2ecc71),
            Self::Red => HexColour(0xfc3f35),
            Self::Orange => HexColour(0xe67e22),
            Self::Lime => HexColour(0x7fff00),
            Self::Blue => HexColour(0x3472f7),
        }
    }
}

/// 24-bit RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColour(pub u32);

impl HexColour {
    /// Six digit lowercase hex without a leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:06x}", self.0 & 0x00ff_ffff)
    }
}

/// Colour scheme containing exactly the [`ACTIVE_COLOURS`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColourMap(BTreeMap<Colour, HexColour>);

impl ColourMap {
    /// Builds the map from stored `(colour_id, rgb)` overrides.
    ///
    /// Overrides for colours outside the active set are ignored and active colours
    /// without an override fall back to their default.
    pub fn from_overrides(overrides: impl IntoIterator<Item = (i16, i32)>) -> Self {
        let mut colours = BTreeMap::new();

        for (id, rgb) in overrides {
            let Some(colour) = Colour::from_id(id) else {
                continue;
            };

            if ACTIVE_COLOURS.contains(&colour) {
                colours.insert(colour, HexColour(rgb as u32));
            }
        }

        for colour in ACTIVE_COLOURS {
            colours.entry(colour).or_insert_with(|| colour.default_rgb());
        }

        Self(colours)
    }

    #[cfg(test)]
    pub fn get(&self, colour: Colour) -> Option<HexColour> {
        self.0.get(&colour).copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_dto(self) -> BTreeMap<String, String> {
        self.0
            .into_iter()
            .map(|(colour, hex)| (colour.id().to_string(), hex.to_hex()))
            .collect()
    }
}

impl Default for ColourMap {
    fn default() -> Self {
        Self::from_overrides(std::iter::empty())
    }
}

/// How ticket channels are named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamingScheme {
    /// `ticket-{id}`
    #[default]
    Id,
    /// `ticket-{username}`
    Username,
}

impl NamingScheme {
    pub fn from_entity(entity: entity::naming_scheme::Model) -> Result<Self, DbErr> {
        match entity.naming_scheme.as_str() {
            "id" => Ok(Self::Id),
            "username" => Ok(Self::Username),
            other => Err(DbErr::Custom(format!("Unknown naming scheme: {}", other))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Username => "username",
        }
    }
}

/// Parses the guild's ticket category.
pub fn category_from_entity(entity: entity::channel_category::Model) -> Result<u64, DbErr> {
    parse_snowflake(&entity.category_id, "category_id")
}

/// Parses the guild's transcript archive channel.
pub fn archive_channel_from_entity(
    entity: entity::archive_channel::Model,
) -> Result<Option<u64>, DbErr> {
    parse_optional_snowflake(entity.channel_id.as_deref(), "channel_id")
}

/// Fully resolved settings included in a guild export.
///
/// Built by the settings aggregator after defaulting rules have been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub settings: GuildSettings,
    pub claim_settings: ClaimSettings,
    pub auto_close: AutoCloseSettings,
    pub ticket_permissions: TicketPermissions,
    pub colours: ColourMap,
    pub welcome_message: String,
    pub ticket_limit: u8,
    pub category: u64,
    pub archive_channel: Option<u64>,
    pub naming_scheme: NamingScheme,
    pub users_can_close: bool,
    pub close_confirmation: bool,
    pub feedback_enabled: bool,
    pub language: Option<String>,
}

impl ExportSettings {
    pub fn into_dto(self) -> SettingsDto {
        SettingsDto {
            hide_claim_button: self.settings.hide_claim_button,
            disable_open_command: self.settings.disable_open_command,
            context_menu_permission_level: self.settings.context_menu_permission_level,
            context_menu_add_sender: self.settings.context_menu_add_sender,
            store_transcripts: self.settings.store_transcripts,
            use_threads: self.settings.use_threads,
            claim_settings: self.claim_settings.into_dto(),
            auto_close: self.auto_close.into_dto(),
            ticket_permissions: self.ticket_permissions.into_dto(),
            colours: self.colours.into_dto(),
            welcome_message: self.welcome_message,
            ticket_limit: self.ticket_limit,
            category: self.category.to_string(),
            archive_channel: self.archive_channel.map(|id| id.to_string()),
            naming_scheme: self.naming_scheme.as_str().to_string(),
            users_can_close: self.users_can_close,
            close_confirmation: self.close_confirmation,
            feedback_enabled: self.feedback_enabled,
            language: self.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_map_fills_defaults_for_missing_active_colours() {
        let colours = ColourMap::from_overrides(vec![(1, 0x123456)]);

        assert_eq!(colours.len(), ACTIVE_COLOURS.len());
        assert_eq!(colours.get(Colour::Green), Some(Colour::Green.default_rgb()));
        assert_eq!(colours.get(Colour::Red), Some(HexColour(0x123456)));
    }

    #[test]
    fn colour_map_ignores_inactive_and_unknown_colours() {
        let colours = ColourMap::from_overrides(vec![(2, 0xffffff), (42, 0x000000)]);

        assert_eq!(colours.len(), ACTIVE_COLOURS.len());
        assert_eq!(colours.get(Colour::Orange), None);
    }

    #[test]
    fn colour_map_dto_uses_ids_and_hex() {
        let dto = ColourMap::from_overrides(vec![(0, 0x00ff00)]).into_dto();

        assert_eq!(dto.get("0").map(String::as_str), Some("00ff00"));
        assert_eq!(dto.get("1").map(String::as_str), Some("fc3f35"));
        assert_eq!(dto.len(), 2);
    }

    #[test]
    fn auto_close_converts_nanoseconds_to_whole_seconds() {
        let settings = AutoCloseSettings::from_entity(entity::auto_close::Model {
            guild_id: "1".to_string(),
            enabled: true,
            since_open_with_no_response: Some(90_500_000_000),
            since_last_message: None,
            on_user_leave: None,
        });

        let dto = settings.into_dto();

        assert!(dto.enabled);
        assert_eq!(dto.since_open_with_no_response, 90);
        assert_eq!(dto.since_last_message, 0);
        assert!(!dto.on_user_leave);
    }

    #[test]
    fn rejects_unknown_naming_scheme() {
        let result = NamingScheme::from_entity(entity::naming_scheme::Model {
            guild_id: "1".to_string(),
            naming_scheme: "emoji".to_string(),
        });

        assert!(result.is_err());
    }
}
