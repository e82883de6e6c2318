//! Filter tags entered on the researcher search page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a free-text filter was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    ThematicLine,
    Language,
    Country,
    Custom,
}

/// A single removable search filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterTag {
    pub id: usize,
    pub kind: FilterKind,
    /// Text exactly as the user typed it, trimmed.
    pub raw_value: String,
    /// Canonical value for known kinds, the raw text otherwise.
    pub label: String,
}

/// Values that free text is matched against.
#[derive(Debug, Clone, Default)]
pub struct KnownValues {
    pub thematic_lines: Vec<String>,
    pub languages: Vec<String>,
    pub countries: Vec<String>,
}

/// Filters grouped by kind, ready to turn into a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub thematic_lines: Vec<String>,
    pub languages: Vec<String>,
    pub countries: Vec<String>,
    pub terms: Vec<String>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.thematic_lines.is_empty()
            && self.languages.is_empty()
            && self.countries.is_empty()
            && self.terms.is_empty()
    }
}

/// Choice made about filter text that was typed but not added as a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingDecision {
    /// Add the pending text as a tag, then search.
    Commit,
    /// Search without the pending text.
    Discard,
}

/// Returned when a search is attempted with undecided pending filter text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("el filtro «{pending}» no se ha añadido; confirme si desea añadirlo o descartarlo")]
pub struct ConfirmationRequired {
    pub pending: String,
}

/// Ordered set of filter tags. Tags with the same kind and value are kept once.
#[derive(Debug, Clone, Default)]
pub struct FilterTagSet {
    tags: Vec<FilterTag>,
    next_id: usize,
}

impl FilterTagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[FilterTag] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Classify `raw_text` and append it. Blank text is ignored. Adding a
    /// value that is already present returns the existing tag.
    pub fn add_tag(
        &mut self,
        raw_text: &str,
        known_thematic_lines: &[String],
        known_languages: &[String],
        known_countries: &[String],
    ) -> Option<FilterTag> {
        let raw_value = raw_text.trim();
        if raw_value.is_empty() {
            return None;
        }

        let (kind, label) = classify(
            raw_value,
            known_thematic_lines,
            known_languages,
            known_countries,
        );

        if let Some(existing) = self
            .tags
            .iter()
            .find(|tag| tag.kind == kind && tag.raw_value.to_lowercase() == raw_value.to_lowercase())
        {
            return Some(existing.clone());
        }

        self.next_id += 1;
        let tag = FilterTag {
            id: self.next_id,
            kind,
            raw_value: raw_value.to_string(),
            label,
        };
        self.tags.push(tag.clone());
        Some(tag)
    }

    /// Shorthand for [`FilterTagSet::add_tag`] with a [`KnownValues`] bundle.
    pub fn add_known(&mut self, raw_text: &str, known: &KnownValues) -> Option<FilterTag> {
        self.add_tag(
            raw_text,
            &known.thematic_lines,
            &known.languages,
            &known.countries,
        )
    }

    /// Remove a tag by id. Unknown ids are ignored.
    pub fn remove_tag(&mut self, id: usize) {
        self.tags.retain(|tag| tag.id != id);
    }

    pub fn criteria(&self) -> SearchCriteria {
        let mut criteria = SearchCriteria::default();
        for tag in &self.tags {
            let bucket = match tag.kind {
                FilterKind::ThematicLine => &mut criteria.thematic_lines,
                FilterKind::Language => &mut criteria.languages,
                FilterKind::Country => &mut criteria.countries,
                FilterKind::Custom => &mut criteria.terms,
            };
            bucket.push(tag.label.clone());
        }
        criteria
    }

    /// Resolve pending filter text before searching. Non-blank pending text
    /// needs an explicit decision.
    pub fn prepare_search(
        &mut self,
        pending_text: Option<&str>,
        decision: Option<PendingDecision>,
        known: &KnownValues,
    ) -> Result<SearchCriteria, ConfirmationRequired> {
        let pending = pending_text.map(str::trim).unwrap_or_default();

        if !pending.is_empty() {
            match decision {
                Some(PendingDecision::Commit) => {
                    self.add_known(pending, known);
                }
                Some(PendingDecision::Discard) => {}
                None => {
                    return Err(ConfirmationRequired {
                        pending: pending.to_string(),
                    });
                }
            }
        }

        Ok(self.criteria())
    }
}

/// Language first, then thematic line, then country; anything else is custom.
fn classify(
    raw_value: &str,
    known_thematic_lines: &[String],
    known_languages: &[String],
    known_countries: &[String],
) -> (FilterKind, String) {
    let lists = [
        (FilterKind::Language, known_languages),
        (FilterKind::ThematicLine, known_thematic_lines),
        (FilterKind::Country, known_countries),
    ];

    for (kind, values) in lists {
        if let Some(found) = values
            .iter()
            .find(|value| value.trim().to_lowercase() == raw_value.to_lowercase())
        {
            return (kind, found.trim().to_string());
        }
    }

    (FilterKind::Custom, raw_value.to_string())
}
