use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::dates::{parse_storage_date, to_storage_date};
use crate::domain::editorial_number::{
    EditorialNumber as DomainEditorialNumber, NewEditorialNumber as DomainNewEditorialNumber,
    UpdateEditorialNumber as DomainUpdateEditorialNumber,
};
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::editorial_numbers)]
pub struct EditorialNumber {
    pub id: i32,
    pub number: i32,
    pub title: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::editorial_numbers)]
pub struct NewEditorialNumber<'a> {
    pub number: i32,
    pub title: Option<&'a str>,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::editorial_numbers)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateEditorialNumber<'a> {
    pub number: i32,
    pub title: Option<&'a str>,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<EditorialNumber> for DomainEditorialNumber {
    type Error = RepositoryError;

    fn try_from(value: EditorialNumber) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            number: value.number,
            title: value.title,
            start_date: parse_storage_date(&value.start_date)?,
            end_date: parse_storage_date(&value.end_date)?,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewEditorialNumber> for NewEditorialNumber<'a> {
    fn from(value: &'a DomainNewEditorialNumber) -> Self {
        Self {
            number: value.number,
            title: value.title.as_deref(),
            start_date: to_storage_date(value.start_date),
            end_date: to_storage_date(value.end_date),
            is_active: value.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateEditorialNumber> for UpdateEditorialNumber<'a> {
    fn from(value: &'a DomainUpdateEditorialNumber) -> Self {
        Self {
            number: value.number,
            title: value.title.as_deref(),
            start_date: to_storage_date(value.start_date),
            end_date: to_storage_date(value.end_date),
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}
