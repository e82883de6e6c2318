use chrono::NaiveDateTime;
use serde::Serialize;

/// Language an article is written in or a researcher works in.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Language {
    pub id: i32,
    pub name: String,
    /// ISO 639-1 code, when known.
    pub code: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLanguage {
    pub name: String,
    pub code: Option<String>,
}

impl NewLanguage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into().to_lowercase());
        self
    }
}
