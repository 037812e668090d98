use sea_orm::{
    sea_query::Query, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::form::{Form, FormInput};

pub struct FormRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all forms of a guild ordered by form ID
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<Form>, DbErr> {
        let forms = entity::prelude::Form::find()
            .filter(entity::form::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::form::Column::FormId)
            .all(self.db)
            .await?;

        forms.into_iter().map(Form::from_entity).collect()
    }

    /// Gets the inputs of every form in a guild keyed by form ID, ordered by position
    pub async fn get_inputs_by_guild(
        &self,
        guild_id: u64,
    ) -> Result<HashMap<i32, Vec<FormInput>>, DbErr> {
        let guild_forms = Query::select()
            .column(entity::form::Column::FormId)
            .from(entity::form::Entity)
            .and_where(entity::form::Column::GuildId.eq(guild_id.to_string()))
            .to_owned();

        let inputs = entity::prelude::FormInput::find()
            .filter(entity::form_input::Column::FormId.in_subquery(guild_forms))
            .order_by_asc(entity::form_input::Column::FormId)
            .order_by_asc(entity::form_input::Column::Position)
            .all(self.db)
            .await?;

        let mut by_form: HashMap<i32, Vec<FormInput>> = HashMap::new();
        for input in inputs {
            by_form
                .entry(input.form_id)
                .or_default()
                .push(FormInput::from_entity(input));
        }

        Ok(by_form)
    }
}
