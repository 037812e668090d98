use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "multi_panel_targets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub multi_panel_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub panel_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
