//! Ticket Dashboard Test Utils
//!
//! Shared testing utilities for the ticket dashboard. Provides a builder for test contexts
//! backed by in-memory SQLite databases, plus factories and fixtures for the ticket bot's
//! tables.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts rows with sensible defaults
//! - **fixture**: In-memory entity models without database insertion
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn exports_panels() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_export_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let panel = factory::panel::create_panel(db, "123").await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
