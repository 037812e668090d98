//! Root export aggregate assembled by the export service.

use crate::{
    model::export::{
        BlacklistDto, ExportDto, FormDto, MultiPanelDto, SupportTeamDto, TagDto,
    },
    server::model::{panel::ExportPanel, settings::ExportSettings, ticket::ExportTicket},
};

/// Maximum number of blacklisted users included in an export.
pub const BLACKLIST_USER_LIMIT: u64 = 100_000;

/// Blacklisted users and roles of a guild.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blacklist {
    pub users: Vec<u64>,
    pub roles: Vec<u64>,
}

impl Blacklist {
    pub fn into_dto(self) -> BlacklistDto {
        BlacklistDto {
            users: self.users.into_iter().map(|id| id.to_string()).collect(),
            roles: self.roles.into_iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Complete snapshot of one guild's data.
///
/// Collections with simple shapes are carried as DTOs already, since nothing downstream
/// of the collection fetchers needs their domain form.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildExport {
    pub guild_id: u64,
    pub settings: ExportSettings,
    pub panels: Vec<ExportPanel>,
    pub multi_panels: Vec<MultiPanelDto>,
    pub tickets: Vec<ExportTicket>,
    pub tags: Vec<TagDto>,
    pub blacklist: Blacklist,
    pub forms: Vec<FormDto>,
    pub staff_teams: Vec<SupportTeamDto>,
}

impl GuildExport {
    pub fn into_dto(self) -> ExportDto {
        ExportDto {
            guild_id: self.guild_id.to_string(),
            settings: self.settings.into_dto(),
            panels: self.panels.into_iter().map(ExportPanel::into_dto).collect(),
            multi_panels: self.multi_panels,
            tickets: self.tickets.into_iter().map(ExportTicket::into_dto).collect(),
            tags: self.tags,
            blacklist: self.blacklist.into_dto(),
            forms: self.forms,
            staff_teams: self.staff_teams,
        }
    }
}
