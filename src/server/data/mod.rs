//! Database repository layer.
//!
//! Repositories read the ticket bot's tables through SeaORM entity models and return
//! domain models. Every multi-row query is ordered by key so that repeated reads of
//! unchanged data produce identical results. Lookups that miss return the zero value of
//! their type rather than an error.

pub mod blacklist;
pub mod embed;
pub mod form;
pub mod multi_panel;
pub mod panel;
pub mod settings;
pub mod support_team;
pub mod tag;
pub mod ticket;

#[cfg(test)]
mod test;
