use pushkind_common::routes::empty_string_as_none;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::dates::{Clock, DateParseError, parse_display_date};
use crate::domain::article::{ArticleStatus, NewArticle, UpdateArticle};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

const TITLE_MAX_LEN: u64 = 512;

#[derive(Debug, Error)]
pub enum ArticleFormError {
    #[error("Datos del artículo no válidos: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("El título no puede estar vacío.")]
    EmptyTitle,
    #[error("Fecha de recepción no válida: {0}.")]
    InvalidSubmissionDate(#[from] DateParseError),
    #[error("El revisor no puede ser el autor del artículo.")]
    ReviewerIsAuthor,
}

/// Payload for creating or replacing an article.
#[derive(Debug, Deserialize, Validate)]
pub struct ArticleForm {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub summary: Option<String>,
    pub author_id: i32,
    #[serde(default)]
    pub reviewer_id: Option<i32>,
    #[serde(default)]
    pub thematic_line_id: Option<i32>,
    #[serde(default)]
    pub language_id: Option<i32>,
    #[serde(default)]
    pub editorial_number_id: Option<i32>,
    #[serde(default)]
    pub status: ArticleStatus,
    /// `DD-MM-YYYY`; today when omitted.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub submitted_on: Option<String>,
}

impl ArticleForm {
    pub fn into_new_article<C: Clock + ?Sized>(
        self,
        clock: &C,
    ) -> Result<NewArticle, ArticleFormError> {
        self.validate()?;

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(ArticleFormError::EmptyTitle);
        }

        if self.reviewer_id == Some(self.author_id) {
            return Err(ArticleFormError::ReviewerIsAuthor);
        }

        let submitted_on = match self.submitted_on.as_deref() {
            Some(raw) => parse_display_date(raw.trim())?,
            None => clock.today(),
        };

        Ok(NewArticle {
            title,
            summary: self
                .summary
                .as_deref()
                .map(sanitize_multiline_text)
                .filter(|value| !value.is_empty()),
            author_id: self.author_id,
            reviewer_id: self.reviewer_id,
            thematic_line_id: self.thematic_line_id,
            language_id: self.language_id,
            editorial_number_id: self.editorial_number_id,
            status: self.status,
            submitted_on,
        })
    }

    pub fn into_update<C: Clock + ?Sized>(
        self,
        clock: &C,
    ) -> Result<UpdateArticle, ArticleFormError> {
        self.into_new_article(clock).map(UpdateArticle::from)
    }
}
