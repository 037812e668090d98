//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary, where
//! snowflake columns stored as strings are parsed into `u64`, and transformed to DTOs at
//! the service boundary. Defaulting rules that depend on more than one table live in the
//! services, not here.

pub mod embed;
pub mod export;
pub mod form;
pub mod panel;
pub mod settings;
pub mod support_team;
pub mod tag;
pub mod ticket;
