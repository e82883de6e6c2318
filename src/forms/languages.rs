use pushkind_common::routes::empty_string_as_none;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::language::NewLanguage;
use crate::forms::sanitize_inline_text;

const NAME_MAX_LEN: u64 = 64;

#[derive(Debug, Error)]
pub enum LanguageFormError {
    #[error("Datos del idioma no válidos: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("El nombre del idioma no puede estar vacío.")]
    EmptyName,
    #[error("Código de idioma no válido: {0}.")]
    InvalidCode(String),
}

#[derive(Debug, Deserialize, Validate)]
pub struct LanguageForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Two-letter ISO 639-1 code.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub code: Option<String>,
}

impl LanguageForm {
    pub fn into_new_language(self) -> Result<NewLanguage, LanguageFormError> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(LanguageFormError::EmptyName);
        }

        let mut language = NewLanguage::new(name);
        if let Some(code) = self.code.as_deref().map(str::trim) {
            if code.len() != 2 || !code.chars().all(|ch| ch.is_ascii_alphabetic()) {
                return Err(LanguageFormError::InvalidCode(code.to_string()));
            }
            language = language.with_code(code);
        }

        Ok(language)
    }
}
