//! SeaORM entities for the ticket bot's database.
//!
//! The schema is owned and migrated by the bot itself; the dashboard only reads it.
//! Discord snowflakes are stored as strings and parsed at the repository boundary.

pub mod prelude;

pub mod active_language;
pub mod archive_channel;
pub mod auto_close;
pub mod blacklist;
pub mod channel_category;
pub mod claim_settings;
pub mod close_confirmation;
pub mod close_reason;
pub mod custom_colour;
pub mod embed;
pub mod embed_field;
pub mod feedback_enabled;
pub mod form;
pub mod form_input;
pub mod guild_settings;
pub mod multi_panel;
pub mod multi_panel_target;
pub mod naming_scheme;
pub mod panel;
pub mod panel_access_control_rule;
pub mod panel_role_mention;
pub mod panel_team;
pub mod panel_user_mention;
pub mod role_blacklist;
pub mod service_rating;
pub mod support_team;
pub mod support_team_member;
pub mod support_team_role;
pub mod tag;
pub mod ticket;
pub mod ticket_limit;
pub mod ticket_permissions;
pub mod users_can_close;
pub mod welcome_message;
