//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as the defaults of
//! the matching factories. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let panel = fixture::panel::entity();
//!
//! let disabled = fixture::panel::entity_builder()
//!     .disabled(true)
//!     .build();
//! ```

pub mod panel;

pub use panel::{entity as panel_entity, entity_builder as panel_entity_builder};
