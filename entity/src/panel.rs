use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "panels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub panel_id: i32,
    pub message_id: String,
    pub channel_id: String,
    pub guild_id: String,
    pub title: String,
    pub content: String,
    pub colour: i32,
    pub target_category: String,
    pub emoji_name: Option<String>,
    pub emoji_id: Option<String>,
    pub welcome_message_id: Option<i32>,
    pub with_default_team: bool,
    pub custom_id: String,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub button_style: i16,
    pub button_label: String,
    pub form_id: Option<i32>,
    /// Per-panel override of the guild naming scheme.
    pub naming_scheme: Option<String>,
    pub disabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::embed::Entity",
        from = "Column::WelcomeMessageId",
        to = "super::embed::Column::Id"
    )]
    WelcomeMessage,
}

impl Related<super::embed::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WelcomeMessage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
