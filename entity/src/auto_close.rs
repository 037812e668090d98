use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "auto_close")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub enabled: bool,
    /// Nanoseconds since the ticket opened without a staff response.
    pub since_open_with_no_response: Option<i64>,
    /// Nanoseconds since the last message in the ticket.
    pub since_last_message: Option<i64>,
    pub on_user_leave: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
