use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// Person who can author articles and/or review them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Researcher {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Institution the researcher belongs to.
    pub affiliation: Option<String>,
    pub country: Option<String>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
    /// Whether the researcher accepts peer review assignments.
    pub is_reviewer: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Researcher {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResearcher {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub affiliation: Option<String>,
    pub country: Option<String>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
    pub is_reviewer: bool,
}

impl NewResearcher {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into().to_lowercase(),
            affiliation: None,
            country: None,
            thematic_line_id: None,
            language_id: None,
            is_reviewer: false,
        }
    }

    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_thematic_line(mut self, thematic_line_id: i32) -> Self {
        self.thematic_line_id = Some(thematic_line_id);
        self
    }

    pub fn with_language(mut self, language_id: i32) -> Self {
        self.language_id = Some(language_id);
        self
    }

    pub fn reviewer(mut self) -> Self {
        self.is_reviewer = true;
        self
    }
}

/// Full replacement of a researcher's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResearcher {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub affiliation: Option<String>,
    pub country: Option<String>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
    pub is_reviewer: bool,
    pub updated_at: NaiveDateTime,
}

impl From<NewResearcher> for UpdateResearcher {
    fn from(value: NewResearcher) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            affiliation: value.affiliation,
            country: value.country,
            thematic_line_id: value.thematic_line_id,
            language_id: value.language_id,
            is_reviewer: value.is_reviewer,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Filters applied when listing researchers. Values inside one filter are
/// alternatives; different filters must all match.
#[derive(Debug, Clone, Default)]
pub struct ResearcherListQuery {
    /// Substring matched against names, email and affiliation.
    pub search: Option<String>,
    pub thematic_line_ids: Vec<i32>,
    pub language_ids: Vec<i32>,
    pub countries: Vec<String>,
    /// Free terms; each one must match names, email or affiliation.
    pub terms: Vec<String>,
    pub reviewers_only: bool,
}

impl ResearcherListQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn thematic_lines(mut self, ids: Vec<i32>) -> Self {
        self.thematic_line_ids = ids;
        self
    }

    pub fn languages(mut self, ids: Vec<i32>) -> Self {
        self.language_ids = ids;
        self
    }

    pub fn countries(mut self, countries: Vec<String>) -> Self {
        self.countries = countries;
        self
    }

    pub fn terms(mut self, terms: Vec<String>) -> Self {
        self.terms = terms;
        self
    }

    pub fn reviewers_only(mut self) -> Self {
        self.reviewers_only = true;
        self
    }
}
