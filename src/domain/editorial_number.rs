use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::dates::display_date;

/// A numbered publication cycle with its submission window.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EditorialNumber {
    pub id: i32,
    /// Issue number shown to readers.
    pub number: i32,
    pub title: Option<String>,
    #[serde(with = "display_date")]
    pub start_date: NaiveDate,
    #[serde(with = "display_date")]
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEditorialNumber {
    pub number: i32,
    pub title: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEditorialNumber {
    pub number: i32,
    pub title: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl UpdateEditorialNumber {
    pub fn from_new(value: NewEditorialNumber) -> Self {
        Self {
            number: value.number,
            title: value.title,
            start_date: value.start_date,
            end_date: value.end_date,
            is_active: value.is_active,
            updated_at: Local::now().naive_utc(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditorialNumberListQuery {
    pub active_only: bool,
    /// Substring matched against the title.
    pub search: Option<String>,
}

impl EditorialNumberListQuery {
    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}
