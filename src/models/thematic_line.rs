use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::thematic_line::{
    NewThematicLine as DomainNewThematicLine, ThematicLine as DomainThematicLine,
    UpdateThematicLine as DomainUpdateThematicLine,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::thematic_lines)]
pub struct ThematicLine {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::thematic_lines)]
pub struct NewThematicLine<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::thematic_lines)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateThematicLine<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl From<ThematicLine> for DomainThematicLine {
    fn from(value: ThematicLine) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewThematicLine> for NewThematicLine<'a> {
    fn from(value: &'a DomainNewThematicLine) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateThematicLine> for UpdateThematicLine<'a> {
    fn from(value: &'a DomainUpdateThematicLine) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}
