use crate::server::{data::ticket::TicketRepository, model::ticket::TicketQueryOptions};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get;
mod get_by_options;
mod get_close_metadata;
mod get_ratings;

const GUILD_ID: &str = "123456789012345678";
const GUILD_ID_U64: u64 = 123456789012345678;
