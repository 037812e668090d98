//! Guild export document.
//!
//! Snowflake IDs are serialized as decimal strings because they exceed the integer range
//! JavaScript clients can represent exactly. Internal row IDs (panels, tickets, forms,
//! teams) stay numeric.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ExportDto {
    pub guild_id: String,
    pub settings: SettingsDto,
    pub panels: Vec<PanelDto>,
    pub multi_panels: Vec<MultiPanelDto>,
    pub tickets: Vec<TicketDto>,
    pub tags: Vec<TagDto>,
    pub blacklist: BlacklistDto,
    pub forms: Vec<FormDto>,
    pub staff_teams: Vec<SupportTeamDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SettingsDto {
    pub hide_claim_button: bool,
    pub disable_open_command: bool,
    pub context_menu_permission_level: i16,
    pub context_menu_add_sender: bool,
    pub store_transcripts: bool,
    pub use_threads: bool,

    pub claim_settings: ClaimSettingsDto,
    pub auto_close: AutoCloseDto,
    pub ticket_permissions: TicketPermissionsDto,
    /// Colour ID → six digit lowercase hex.
    pub colours: BTreeMap<String, String>,

    pub welcome_message: String,
    pub ticket_limit: u8,
    pub category: String,
    pub archive_channel: Option<String>,
    pub naming_scheme: String,
    pub users_can_close: bool,
    pub close_confirmation: bool,
    pub feedback_enabled: bool,
    pub language: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClaimSettingsDto {
    pub support_can_view: bool,
    pub support_can_type: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AutoCloseDto {
    pub enabled: bool,
    /// Whole seconds, 0 when unset.
    pub since_open_with_no_response: i64,
    /// Whole seconds, 0 when unset.
    pub since_last_message: i64,
    pub on_user_leave: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketPermissionsDto {
    pub attach_files: bool,
    pub embed_links: bool,
    pub add_reactions: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PanelDto {
    pub panel_id: i32,
    pub message_id: String,
    pub channel_id: String,
    pub guild_id: String,
    pub title: String,
    pub content: String,
    pub colour: i32,
    pub category_id: String,
    pub custom_id: String,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub button_style: i16,
    pub button_label: String,
    pub form_id: Option<i32>,
    pub with_default_team: bool,
    pub naming_scheme: Option<String>,
    pub disabled: bool,

    pub welcome_message: Option<EmbedDto>,
    pub use_custom_emoji: bool,
    pub emote: EmojiDto,
    pub mentions: Vec<String>,
    pub teams: Vec<i32>,
    pub use_server_default_naming_scheme: bool,
    pub access_control_list: Vec<AccessControlRuleDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EmojiDto {
    pub name: Option<String>,
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AccessControlRuleDto {
    pub role_id: String,
    pub action: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct EmbedDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub colour: i32,
    pub author: Option<EmbedAuthorDto>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub footer: Option<EmbedFooterDto>,
    pub timestamp: Option<DateTime<Utc>>,
    pub fields: Vec<EmbedFieldDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EmbedAuthorDto {
    pub name: String,
    pub icon_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EmbedFooterDto {
    pub text: String,
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EmbedFieldDto {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MultiPanelDto {
    pub id: i32,
    pub message_id: String,
    pub channel_id: String,
    pub guild_id: String,
    pub title: String,
    pub content: String,
    pub colour: i32,
    pub select_menu: bool,
    pub panels: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketDto {
    pub ticket_id: i32,
    pub close_reason: Option<String>,
    pub closed_by: Option<String>,
    pub rating: Option<u8>,
    /// Archived message log, passed through as stored by the archive.
    #[schema(value_type = Object)]
    pub transcript: serde_json::Value,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TagDto {
    pub id: String,
    pub trigger: String,
    pub use_guild_command: bool,
    pub content: Option<String>,
    pub use_embed: bool,
    pub embed: Option<EmbedDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BlacklistDto {
    pub users: Vec<String>,
    pub roles: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FormDto {
    pub form_id: i32,
    pub guild_id: String,
    pub title: String,
    pub custom_id: String,
    pub inputs: Vec<FormInputDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FormInputDto {
    pub id: i32,
    pub form_id: i32,
    pub position: i32,
    pub custom_id: String,
    pub style: i16,
    pub label: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub min_length: Option<i16>,
    pub max_length: Option<i16>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SupportTeamDto {
    pub id: i32,
    pub name: String,
    pub on_call_role_id: Option<String>,
    pub users: Vec<String>,
    pub roles: Vec<String>,
}
