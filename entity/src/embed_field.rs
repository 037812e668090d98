use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "embed_fields")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub field_id: i32,
    pub embed_id: i32,
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
