//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Entities
//! with many columns get a `Factory` builder plus a `create_*` shorthand; join tables and
//! settings rows get plain helper functions.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guild_id = factory::helpers::next_snowflake();
//! let panel = factory::panel::create_panel(&db, &guild_id).await?;
//! factory::panel::add_role_mention(&db, panel.panel_id, "123456789").await?;
//! factory::settings::set_ticket_limit(&db, &guild_id, 0).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let embed = factory::embed::EmbedFactory::new(&db, &guild_id)
//!     .title("Welcome")
//!     .build()
//!     .await?;
//!
//! let panel = factory::panel::PanelFactory::new(&db, &guild_id)
//!     .welcome_message_id(Some(embed.id))
//!     .emoji(Some("ticket"), Some("555666777"))
//!     .build()
//!     .await?;
//! ```

pub mod blacklist;
pub mod embed;
pub mod form;
pub mod helpers;
pub mod multi_panel;
pub mod panel;
pub mod settings;
pub mod support_team;
pub mod tag;
pub mod ticket;

pub use embed::create_embed;
pub use form::create_form;
pub use multi_panel::create_multi_panel;
pub use panel::create_panel;
pub use support_team::create_team;
pub use tag::create_tag;
pub use ticket::create_ticket;
