//! Conversion between the display form (`DD-MM-YYYY`) used by the frontend
//! and the storage form (`YYYY-MM-DD`) used by the database.

use chrono::{Datelike, Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref DISPLAY_DATE: Regex =
        Regex::new(r"^(0[1-9]|[12]\d|3[01])-(0[1-9]|1[0-2])-(\d{4})$").unwrap();
    static ref STORAGE_DATE: Regex =
        Regex::new(r"^(\d{4})-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").unwrap();
}

/// Errors produced while parsing a textual date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// The text does not follow the expected layout.
    #[error("la fecha `{0}` no tiene el formato esperado")]
    InvalidFormat(String),
    /// The layout is right but the day does not exist in that month.
    #[error("la fecha `{0}` no existe en el calendario")]
    InvalidCalendarDate(String),
}

/// Parse a `DD-MM-YYYY` date.
pub fn parse_display_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let captures = DISPLAY_DATE
        .captures(value)
        .ok_or_else(|| DateParseError::InvalidFormat(value.to_string()))?;

    build_date(value, &captures[3], &captures[2], &captures[1])
}

/// Render a date as zero-padded `DD-MM-YYYY`.
pub fn format_display_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year())
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_storage_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let captures = STORAGE_DATE
        .captures(value)
        .ok_or_else(|| DateParseError::InvalidFormat(value.to_string()))?;

    build_date(value, &captures[1], &captures[2], &captures[3])
}

/// Render a date as zero-padded `YYYY-MM-DD`.
pub fn to_storage_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

fn build_date(raw: &str, year: &str, month: &str, day: &str) -> Result<NaiveDate, DateParseError> {
    let invalid_format = || DateParseError::InvalidFormat(raw.to_string());

    let year: i32 = year.parse().map_err(|_| invalid_format())?;
    let month: u32 = month.parse().map_err(|_| invalid_format())?;
    let day: u32 = day.parse().map_err(|_| invalid_format())?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateParseError::InvalidCalendarDate(raw.to_string()))?;

    // Constructing the date must reproduce the exact components.
    if date.year() != year || date.month() != month || date.day() != day {
        return Err(DateParseError::InvalidCalendarDate(raw.to_string()));
    }

    Ok(date)
}

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local time zone of the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Today's date in display form.
pub fn today_display<C: Clock + ?Sized>(clock: &C) -> String {
    format_display_date(clock.today())
}

/// Serde adapter that writes and reads dates in display form.
pub mod display_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_display_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_display_date(&raw).map_err(serde::de::Error::custom)
    }
}
