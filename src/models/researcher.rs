use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::researcher::{
    NewResearcher as DomainNewResearcher, Researcher as DomainResearcher,
    UpdateResearcher as DomainUpdateResearcher,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::researchers)]
pub struct Researcher {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub affiliation: Option<String>,
    pub country: Option<String>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
    pub is_reviewer: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::researchers)]
pub struct NewResearcher<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub affiliation: Option<&'a str>,
    pub country: Option<&'a str>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
    pub is_reviewer: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::researchers)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateResearcher<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub affiliation: Option<&'a str>,
    pub country: Option<&'a str>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
    pub is_reviewer: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Researcher> for DomainResearcher {
    fn from(value: Researcher) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            affiliation: value.affiliation,
            country: value.country,
            thematic_line_id: value.thematic_line_id,
            language_id: value.language_id,
            is_reviewer: value.is_reviewer,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewResearcher> for NewResearcher<'a> {
    fn from(value: &'a DomainNewResearcher) -> Self {
        Self {
            first_name: value.first_name.as_str(),
            last_name: value.last_name.as_str(),
            email: value.email.as_str(),
            affiliation: value.affiliation.as_deref(),
            country: value.country.as_deref(),
            thematic_line_id: value.thematic_line_id,
            language_id: value.language_id,
            is_reviewer: value.is_reviewer,
        }
    }
}

impl<'a> From<&'a DomainUpdateResearcher> for UpdateResearcher<'a> {
    fn from(value: &'a DomainUpdateResearcher) -> Self {
        Self {
            first_name: value.first_name.as_str(),
            last_name: value.last_name.as_str(),
            email: value.email.as_str(),
            affiliation: value.affiliation.as_deref(),
            country: value.country.as_deref(),
            thematic_line_id: value.thematic_line_id,
            language_id: value.language_id,
            is_reviewer: value.is_reviewer,
            updated_at: value.updated_at,
        }
    }
}
