use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::dates::display_date;

/// Editorial workflow state of a submission.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    /// Submitted and waiting for an editor.
    #[default]
    Received,
    InReview,
    Accepted,
    Rejected,
    Published,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Received => "received",
            ArticleStatus::InReview => "in_review",
            ArticleStatus::Accepted => "accepted",
            ArticleStatus::Rejected => "rejected",
            ArticleStatus::Published => "published",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "received" => Ok(ArticleStatus::Received),
            "in_review" => Ok(ArticleStatus::InReview),
            "accepted" => Ok(ArticleStatus::Accepted),
            "rejected" => Ok(ArticleStatus::Rejected),
            "published" => Ok(ArticleStatus::Published),
            other => Err(format!("unknown article status `{other}`")),
        }
    }
}

/// An article submitted to the journal.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    /// Researcher who submitted the article.
    pub author_id: i32,
    /// Researcher assigned as peer reviewer.
    pub reviewer_id: Option<i32>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
    pub editorial_number_id: Option<i32>,
    pub status: ArticleStatus,
    #[serde(with = "display_date")]
    pub submitted_on: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub summary: Option<String>,
    pub author_id: i32,
    pub reviewer_id: Option<i32>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
    pub editorial_number_id: Option<i32>,
    pub status: ArticleStatus,
    pub submitted_on: NaiveDate,
}

/// Full replacement of an article's editable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateArticle {
    pub title: String,
    pub summary: Option<String>,
    pub author_id: i32,
    pub reviewer_id: Option<i32>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
    pub editorial_number_id: Option<i32>,
    pub status: ArticleStatus,
    pub submitted_on: NaiveDate,
    pub updated_at: NaiveDateTime,
}

impl From<NewArticle> for UpdateArticle {
    fn from(value: NewArticle) -> Self {
        Self {
            title: value.title,
            summary: value.summary,
            author_id: value.author_id,
            reviewer_id: value.reviewer_id,
            thematic_line_id: value.thematic_line_id,
            language_id: value.language_id,
            editorial_number_id: value.editorial_number_id,
            status: value.status,
            submitted_on: value.submitted_on,
            updated_at: Local::now().naive_utc(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArticleListQuery {
    /// Substring matched against title and summary.
    pub search: Option<String>,
    pub status: Option<ArticleStatus>,
    pub editorial_number_id: Option<i32>,
    pub author_id: Option<i32>,
    pub reviewer_id: Option<i32>,
    pub thematic_line_id: Option<i32>,
    pub language_id: Option<i32>,
}

impl ArticleListQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn editorial_number(mut self, editorial_number_id: i32) -> Self {
        self.editorial_number_id = Some(editorial_number_id);
        self
    }

    pub fn author(mut self, author_id: i32) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn reviewer(mut self, reviewer_id: i32) -> Self {
        self.reviewer_id = Some(reviewer_id);
        self
    }

    pub fn thematic_line(mut self, thematic_line_id: i32) -> Self {
        self.thematic_line_id = Some(thematic_line_id);
        self
    }

    pub fn language(mut self, language_id: i32) -> Self {
        self.language_id = Some(language_id);
        self
    }
}
