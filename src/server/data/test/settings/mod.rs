use crate::server::{
    data::settings::SettingsRepository,
    model::settings::{Colour, NamingScheme, ACTIVE_COLOURS},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod defaults;
mod get_archive_channel;
mod get_colours;
mod stored_values;
