//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Access checks**: Guild-level checks such as export ownership or ticket guild matching
//! - **Orchestration**: Running repository lookups and external calls concurrently and
//!   joining their results
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! External systems (the transcript archive and Discord) are reached through traits so
//! services can be tested against in-memory stand-ins.

pub mod archive;
pub mod export;
pub mod guild;
pub mod panel;
pub mod ticket;
