use chrono::Local;
use pushkind_common::routes::empty_string_as_none;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::thematic_line::{NewThematicLine, UpdateThematicLine};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

const NAME_MAX_LEN: u64 = 128;

#[derive(Debug, Error)]
pub enum ThematicLineFormError {
    #[error("Datos de la línea temática no válidos: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("El nombre de la línea temática no puede estar vacío.")]
    EmptyName,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ThematicLineForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl ThematicLineForm {
    fn sanitized(&self) -> Result<(String, Option<String>), ThematicLineFormError> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ThematicLineFormError::EmptyName);
        }

        let description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        Ok((name, description))
    }

    pub fn into_new_thematic_line(self) -> Result<NewThematicLine, ThematicLineFormError> {
        let (name, description) = self.sanitized()?;

        let mut line = NewThematicLine::new(name);
        if let Some(description) = description {
            line = line.with_description(description);
        }
        Ok(line)
    }

    /// Full replacement; a missing `is_active` keeps the line active.
    pub fn into_update(self) -> Result<UpdateThematicLine, ThematicLineFormError> {
        let (name, description) = self.sanitized()?;

        Ok(UpdateThematicLine {
            name,
            description,
            is_active: self.is_active.unwrap_or(true),
            updated_at: Local::now().naive_utc(),
        })
    }
}
