//! Form domain models. Forms are modal dialogs shown to a member before a ticket opens.

use sea_orm::DbErr;

use crate::{
    model::export::{FormDto, FormInputDto},
    server::util::parse::parse_snowflake,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub form_id: i32,
    pub guild_id: u64,
    pub title: String,
    pub custom_id: String,
}

impl Form {
    pub fn from_entity(entity: entity::form::Model) -> Result<Self, DbErr> {
        Ok(Self {
            form_id: entity.form_id,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            title: entity.title,
            custom_id: entity.custom_id,
        })
    }

    pub fn into_dto(self, inputs: Vec<FormInput>) -> FormDto {
        FormDto {
            form_id: self.form_id,
            guild_id: self.guild_id.to_string(),
            title: self.title,
            custom_id: self.custom_id,
            inputs: inputs.into_iter().map(FormInput::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub id: i32,
    pub form_id: i32,
    pub position: i32,
    pub custom_id: String,
    pub style: i16,
    pub label: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub min_length: Option<i16>,
    pub max_length: Option<i16>,
}

impl FormInput {
    pub fn from_entity(entity: entity::form_input::Model) -> Self {
        Self {
            id: entity.id,
            form_id: entity.form_id,
            position: entity.position,
            custom_id: entity.custom_id,
            style: entity.style,
            label: entity.label,
            placeholder: entity.placeholder,
            required: entity.required,
            min_length: entity.min_length,
            max_length: entity.max_length,
        }
    }

    pub fn into_dto(self) -> FormInputDto {
        FormInputDto {
            id: self.id,
            form_id: self.form_id,
            position: self.position,
            custom_id: self.custom_id,
            style: self.style,
            label: self.label,
            placeholder: self.placeholder,
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
        }
    }
}
