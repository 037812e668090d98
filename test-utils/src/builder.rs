use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Embed, Panel};
///
/// let test = TestBuilder::new()
///     .with_table(Embed)
///     .with_table(Panel)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every per-guild settings table.
    pub fn with_settings_tables(self) -> Self {
        self.with_table(GuildSettings)
            .with_table(ClaimSettings)
            .with_table(AutoClose)
            .with_table(TicketPermissions)
            .with_table(CustomColour)
            .with_table(WelcomeMessage)
            .with_table(TicketLimit)
            .with_table(ChannelCategory)
            .with_table(ArchiveChannel)
            .with_table(UsersCanClose)
            .with_table(CloseConfirmation)
            .with_table(FeedbackEnabled)
            .with_table(NamingScheme)
            .with_table(ActiveLanguage)
    }

    /// Adds the panel, multi-panel and embed tables.
    ///
    /// `Embed` is created before `Panel` since panels reference their welcome message.
    pub fn with_panel_tables(self) -> Self {
        self.with_table(Embed)
            .with_table(EmbedField)
            .with_table(Panel)
            .with_table(PanelAccessControlRule)
            .with_table(PanelRoleMention)
            .with_table(PanelUserMention)
            .with_table(PanelTeam)
            .with_table(MultiPanel)
            .with_table(MultiPanelTarget)
    }

    /// Adds every table read by a guild export.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_export_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_export_tables(self) -> Self {
        self.with_settings_tables()
            .with_panel_tables()
            .with_table(Ticket)
            .with_table(ServiceRating)
            .with_table(CloseReason)
            .with_table(Tag)
            .with_table(Blacklist)
            .with_table(RoleBlacklist)
            .with_table(Form)
            .with_table(FormInput)
            .with_table(SupportTeam)
            .with_table(SupportTeamMember)
            .with_table(SupportTeamRole)
    }

    /// Builds the test context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
