use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::dates::{parse_storage_date, to_storage_date};
use crate::domain::article::{
    Article as DomainArticle, NewArticle as DomainNewArticle, UpdateArticle as DomainUpdateArticle,
};
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::articles)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub author_id: i32,
    pub reviewer_id: Option<i32>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
    pub editorial_number_id: Option<i32>,
    pub status: String,
    pub submitted_on: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::articles)]
pub struct NewArticle<'a> {
    pub title: &'a str,
    pub summary: Option<&'a str>,
    pub author_id: i32,
    pub reviewer_id: Option<i32>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
    pub editorial_number_id: Option<i32>,
    pub status: &'a str,
    pub submitted_on: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::articles)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateArticle<'a> {
    pub title: &'a str,
    pub summary: Option<&'a str>,
    pub author_id: i32,
    pub reviewer_id: Option<i32>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
    pub editorial_number_id: Option<i32>,
    pub status: &'a str,
    pub submitted_on: String,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Article> for DomainArticle {
    type Error = RepositoryError;

    fn try_from(value: Article) -> Result<Self, Self::Error> {
        let status = value
            .status
            .parse()
            .map_err(RepositoryError::InvalidData)?;

        Ok(Self {
            id: value.id,
            title: value.title,
            summary: value.summary,
            author_id: value.author_id,
            reviewer_id: value.reviewer_id,
            thematic_line_id: value.thematic_line_id,
            language_id: value.language_id,
            editorial_number_id: value.editorial_number_id,
            status,
            submitted_on: parse_storage_date(&value.submitted_on)?,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewArticle> for NewArticle<'a> {
    fn from(value: &'a DomainNewArticle) -> Self {
        Self {
            title: value.title.as_str(),
            summary: value.summary.as_deref(),
            author_id: value.author_id,
            reviewer_id: value.reviewer_id,
            thematic_line_id: value.thematic_line_id,
            language_id: value.language_id,
            editorial_number_id: value.editorial_number_id,
            status: value.status.as_str(),
            submitted_on: to_storage_date(value.submitted_on),
        }
    }
}

impl<'a> From<&'a DomainUpdateArticle> for UpdateArticle<'a> {
    fn from(value: &'a DomainUpdateArticle) -> Self {
        Self {
            title: value.title.as_str(),
            summary: value.summary.as_deref(),
            author_id: value.author_id,
            reviewer_id: value.reviewer_id,
            thematic_line_id: value.thematic_line_id,
            language_id: value.language_id,
            editorial_number_id: value.editorial_number_id,
            status: value.status.as_str(),
            submitted_on: to_storage_date(value.submitted_on),
            updated_at: value.updated_at,
        }
    }
}
