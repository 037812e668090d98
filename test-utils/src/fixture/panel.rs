//! Panel fixtures for creating in-memory test data.

use entity::panel;

/// Default test panel title.
pub const DEFAULT_TITLE: &str = "Open a ticket!";

/// Default test panel content.
pub const DEFAULT_CONTENT: &str = "By clicking the button, a ticket will be opened for you.";

/// Default test guild ID for panels.
pub const DEFAULT_GUILD_ID: &str = "987654321012345678";

/// Default test channel the panel message is posted in.
pub const DEFAULT_CHANNEL_ID: &str = "987654321012345679";

/// Default ticket category for panels.
pub const DEFAULT_CATEGORY_ID: &str = "987654321012345680";

/// Default panel colour.
pub const DEFAULT_COLOUR: i32 = 0x2ecc71;

/// Creates a panel entity model with default values.
///
/// # Default Values
/// - panel_id: `1`
/// - guild_id: `"987654321012345678"`
/// - title: `"Open a ticket!"`
/// - emoji: `📩` without a custom emoji ID
/// - no welcome message, form or naming scheme override
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let panel = fixture::panel::entity();
/// assert_eq!(panel.title, "Open a ticket!");
/// ```
pub fn entity() -> panel::Model {
    entity_builder().build()
}

/// Creates a panel entity builder for customization.
pub fn entity_builder() -> PanelEntityBuilder {
    PanelEntityBuilder::default()
}

/// Builder for customized panel entity models.
pub struct PanelEntityBuilder {
    model: panel::Model,
}

impl Default for PanelEntityBuilder {
    fn default() -> Self {
        Self {
            model: panel::Model {
                panel_id: 1,
                message_id: "987654321012345681".to_string(),
                channel_id: DEFAULT_CHANNEL_ID.to_string(),
                guild_id: DEFAULT_GUILD_ID.to_string(),
                title: DEFAULT_TITLE.to_string(),
                content: DEFAULT_CONTENT.to_string(),
                colour: DEFAULT_COLOUR,
                target_category: DEFAULT_CATEGORY_ID.to_string(),
                emoji_name: Some("📩".to_string()),
                emoji_id: None,
                welcome_message_id: None,
                with_default_team: true,
                custom_id: "panel-1".to_string(),
                image_url: None,
                thumbnail_url: None,
                button_style: 1,
                button_label: "Open a ticket!".to_string(),
                form_id: None,
                naming_scheme: None,
                disabled: false,
            },
        }
    }
}

impl PanelEntityBuilder {
    pub fn panel_id(mut self, panel_id: i32) -> Self {
        self.model.panel_id = panel_id;
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.model.guild_id = guild_id.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.model.message_id = message_id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.model.title = title.into();
        self
    }

    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.model.custom_id = custom_id.into();
        self
    }

    /// Sets the emoji shown on the panel button.
    ///
    /// # Arguments
    /// - `name` - Unicode emoji or custom emoji name
    /// - `id` - Custom emoji ID, `None` for unicode emoji
    pub fn emoji(mut self, name: Option<&str>, id: Option<&str>) -> Self {
        self.model.emoji_name = name.map(str::to_string);
        self.model.emoji_id = id.map(str::to_string);
        self
    }

    pub fn welcome_message_id(mut self, embed_id: Option<i32>) -> Self {
        self.model.welcome_message_id = embed_id;
        self
    }

    pub fn form_id(mut self, form_id: Option<i32>) -> Self {
        self.model.form_id = form_id;
        self
    }

    pub fn naming_scheme(mut self, naming_scheme: Option<&str>) -> Self {
        self.model.naming_scheme = naming_scheme.map(str::to_string);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.model.disabled = disabled;
        self
    }

    pub fn build(self) -> panel::Model {
        self.model
    }
}
