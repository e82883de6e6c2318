use chrono::NaiveDateTime;
use serde::Serialize;

/// Topical category applied to researchers and articles.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ThematicLine {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThematicLine {
    pub name: String,
    pub description: Option<String>,
}

impl NewThematicLine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateThematicLine {
    pub name: String,
    /// `None` clears the description.
    pub description: Option<String>,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct ThematicLineListQuery {
    /// Substring matched against the name.
    pub search: Option<String>,
    pub active_only: bool,
}

impl ThematicLineListQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }
}
