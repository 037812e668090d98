use crate::server::{data::panel::PanelRepository, model::panel::AccessControlAction};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_access_control_rules_by_guild;
mod get_by_guild_with_welcome_message;
mod side_tables;
