use pushkind_common::routes::empty_string_as_none;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::dates::{DateParseError, parse_display_date};
use crate::domain::editorial_number::NewEditorialNumber;
use crate::forms::optional_inline;
use crate::overlap::DateRange;

const TITLE_MAX_LEN: u64 = 256;

pub type EditorialNumberFormResult<T> = Result<T, EditorialNumberFormError>;

#[derive(Debug, Error)]
pub enum EditorialNumberFormError {
    #[error("Datos del número editorial no válidos: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Fecha de inicio no válida: {0}.")]
    InvalidStartDate(DateParseError),
    #[error("Fecha de fin no válida: {0}.")]
    InvalidEndDate(DateParseError),
    #[error("La fecha de inicio debe ser anterior a la fecha de fin.")]
    StartNotBeforeEnd,
}

fn default_active() -> bool {
    true
}

/// Payload for creating or replacing an editorial number. Dates use the
/// `DD-MM-YYYY` display form.
#[derive(Debug, Deserialize, Validate)]
pub struct EditorialNumberForm {
    #[validate(range(min = 1))]
    pub number: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TITLE_MAX_LEN))]
    pub title: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl EditorialNumberForm {
    /// Validated record together with its date window.
    pub fn into_new_editorial_number(
        self,
    ) -> EditorialNumberFormResult<(NewEditorialNumber, DateRange)> {
        self.validate()?;

        let range = parse_range(&self.start_date, &self.end_date)?;

        let new_number = NewEditorialNumber {
            number: self.number,
            title: optional_inline(self.title.as_deref()),
            start_date: range.start,
            end_date: range.end,
            is_active: self.is_active,
        };

        Ok((new_number, range))
    }
}

/// Parse a pair of display dates into a range with `start < end`.
pub fn parse_range(start: &str, end: &str) -> EditorialNumberFormResult<DateRange> {
    let start =
        parse_display_date(start.trim()).map_err(EditorialNumberFormError::InvalidStartDate)?;
    let end = parse_display_date(end.trim()).map_err(EditorialNumberFormError::InvalidEndDate)?;

    DateRange::new(start, end).map_err(|_| EditorialNumberFormError::StartNotBeforeEnd)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn form(start: &str, end: &str) -> EditorialNumberForm {
        EditorialNumberForm {
            number: 12,
            title: Some("  Memoria   y territorio ".into()),
            start_date: start.into(),
            end_date: end.into(),
            is_active: true,
        }
    }

    #[test]
    fn converts_display_dates() {
        let (new_number, range) = form("01-01-2024", "30-06-2024")
            .into_new_editorial_number()
            .expect("valid form");

        assert_eq!(new_number.title.as_deref(), Some("Memoria y territorio"));
        assert_eq!(
            new_number.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("date")
        );
        assert_eq!(range.end, new_number.end_date);
    }

    #[test]
    fn rejects_start_after_end() {
        let err = form("01-06-2024", "01-05-2024")
            .into_new_editorial_number()
            .expect_err("reversed range");

        assert!(matches!(err, EditorialNumberFormError::StartNotBeforeEnd));
        assert_eq!(
            err.to_string(),
            "La fecha de inicio debe ser anterior a la fecha de fin."
        );
    }

    #[test]
    fn rejects_equal_dates() {
        assert!(matches!(
            form("01-05-2024", "01-05-2024").into_new_editorial_number(),
            Err(EditorialNumberFormError::StartNotBeforeEnd)
        ));
    }

    #[test]
    fn reports_which_date_is_wrong() {
        assert!(matches!(
            form("2024-01-01", "30-06-2024").into_new_editorial_number(),
            Err(EditorialNumberFormError::InvalidStartDate(
                DateParseError::InvalidFormat(_)
            ))
        ));
        assert!(matches!(
            form("01-01-2024", "31-02-2024").into_new_editorial_number(),
            Err(EditorialNumberFormError::InvalidEndDate(
                DateParseError::InvalidCalendarDate(_)
            ))
        ));
    }

    #[test]
    fn rejects_non_positive_number() {
        let mut payload = form("01-01-2024", "30-06-2024");
        payload.number = 0;

        assert!(matches!(
            payload.into_new_editorial_number(),
            Err(EditorialNumberFormError::Validation(_))
        ));
    }
}
