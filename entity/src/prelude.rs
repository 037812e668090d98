pub use super::active_language::Entity as ActiveLanguage;
pub use super::archive_channel::Entity as ArchiveChannel;
pub use super::auto_close::Entity as AutoClose;
pub use super::blacklist::Entity as Blacklist;
pub use super::channel_category::Entity as ChannelCategory;
pub use super::claim_settings::Entity as ClaimSettings;
pub use super::close_confirmation::Entity as CloseConfirmation;
pub use super::close_reason::Entity as CloseReason;
pub use super::custom_colour::Entity as CustomColour;
pub use super::embed::Entity as Embed;
pub use super::embed_field::Entity as EmbedField;
pub use super::feedback_enabled::Entity as FeedbackEnabled;
pub use super::form::Entity as Form;
pub use super::form_input::Entity as FormInput;
pub use super::guild_settings::Entity as GuildSettings;
pub use super::multi_panel::Entity as MultiPanel;
pub use super::multi_panel_target::Entity as MultiPanelTarget;
pub use super::naming_scheme::Entity as NamingScheme;
pub use super::panel::Entity as Panel;
pub use super::panel_access_control_rule::Entity as PanelAccessControlRule;
pub use super::panel_role_mention::Entity as PanelRoleMention;
pub use super::panel_team::Entity as PanelTeam;
pub use super::panel_user_mention::Entity as PanelUserMention;
pub use super::role_blacklist::Entity as RoleBlacklist;
pub use super::service_rating::Entity as ServiceRating;
pub use super::support_team::Entity as SupportTeam;
pub use super::support_team_member::Entity as SupportTeamMember;
pub use super::support_team_role::Entity as SupportTeamRole;
pub use super::tag::Entity as Tag;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_limit::Entity as TicketLimit;
pub use super::ticket_permissions::Entity as TicketPermissions;
pub use super::users_can_close::Entity as UsersCanClose;
pub use super::welcome_message::Entity as WelcomeMessage;
