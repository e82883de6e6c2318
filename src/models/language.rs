use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::language::{Language as DomainLanguage, NewLanguage as DomainNewLanguage};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::languages)]
pub struct Language {
    pub id: i32,
    pub name: String,
    pub code: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::languages)]
pub struct NewLanguage<'a> {
    pub name: &'a str,
    pub code: Option<&'a str>,
}

impl From<Language> for DomainLanguage {
    fn from(value: Language) -> Self {
        Self {
            id: value.id,
            name: value.name,
            code: value.code,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewLanguage> for NewLanguage<'a> {
    fn from(value: &'a DomainNewLanguage) -> Self {
        Self {
            name: value.name.as_str(),
            code: value.code.as_deref(),
        }
    }
}
