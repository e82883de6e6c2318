use pushkind_common::db::{DbConnection, DbPool};

use crate::domain::{
    article::{Article, ArticleListQuery, NewArticle, UpdateArticle},
    editorial_number::{
        EditorialNumber, EditorialNumberListQuery, NewEditorialNumber, UpdateEditorialNumber,
    },
    language::{Language, NewLanguage},
    researcher::{NewResearcher, Researcher, ResearcherListQuery, UpdateResearcher},
    thematic_line::{NewThematicLine, ThematicLine, ThematicLineListQuery, UpdateThematicLine},
    user::{NewUser, UpdateUser, User, UserListQuery},
};
use crate::repository::errors::RepositoryResult;

pub mod article;
pub mod editorial_number;
pub mod errors;
pub mod language;
pub mod researcher;
pub mod thematic_line;
pub mod user;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// `%term%` pattern for SQL `LIKE`.
fn like_pattern(term: &str) -> String {
    format!("%{}%", term.trim())
}

pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    fn list_users(&self, query: UserListQuery) -> RepositoryResult<Vec<User>>;
    fn count_users(&self) -> RepositoryResult<usize>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
    fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
}

pub trait EditorialNumberReader {
    fn get_editorial_number_by_id(&self, id: i32) -> RepositoryResult<Option<EditorialNumber>>;
    fn list_editorial_numbers(
        &self,
        query: EditorialNumberListQuery,
    ) -> RepositoryResult<Vec<EditorialNumber>>;
}

pub trait EditorialNumberWriter {
    fn create_editorial_number(
        &self,
        new_number: &NewEditorialNumber,
    ) -> RepositoryResult<EditorialNumber>;
    fn update_editorial_number(
        &self,
        number_id: i32,
        updates: &UpdateEditorialNumber,
    ) -> RepositoryResult<EditorialNumber>;
}

pub trait ResearcherReader {
    fn get_researcher_by_id(&self, id: i32) -> RepositoryResult<Option<Researcher>>;
    fn list_researchers(&self, query: ResearcherListQuery) -> RepositoryResult<Vec<Researcher>>;
    /// Distinct non-empty countries, sorted.
    fn list_countries(&self) -> RepositoryResult<Vec<String>>;
}

pub trait ResearcherWriter {
    fn create_researcher(&self, new_researcher: &NewResearcher) -> RepositoryResult<Researcher>;
    /// Insert all researchers or none.
    fn create_researchers(&self, new_researchers: &[NewResearcher]) -> RepositoryResult<usize>;
    fn update_researcher(
        &self,
        researcher_id: i32,
        updates: &UpdateResearcher,
    ) -> RepositoryResult<Researcher>;
    fn delete_researcher(&self, researcher_id: i32) -> RepositoryResult<()>;
}

pub trait ThematicLineReader {
    fn get_thematic_line_by_id(&self, id: i32) -> RepositoryResult<Option<ThematicLine>>;
    fn list_thematic_lines(
        &self,
        query: ThematicLineListQuery,
    ) -> RepositoryResult<Vec<ThematicLine>>;
}

pub trait ThematicLineWriter {
    fn create_thematic_line(&self, new_line: &NewThematicLine) -> RepositoryResult<ThematicLine>;
    fn update_thematic_line(
        &self,
        line_id: i32,
        updates: &UpdateThematicLine,
    ) -> RepositoryResult<ThematicLine>;
    fn delete_thematic_line(&self, line_id: i32) -> RepositoryResult<()>;
}

pub trait LanguageReader {
    fn list_languages(&self) -> RepositoryResult<Vec<Language>>;
}

pub trait LanguageWriter {
    fn create_language(&self, new_language: &NewLanguage) -> RepositoryResult<Language>;
    fn delete_language(&self, language_id: i32) -> RepositoryResult<()>;
}

pub trait ArticleReader {
    fn get_article_by_id(&self, id: i32) -> RepositoryResult<Option<Article>>;
    fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<Vec<Article>>;
}

pub trait ArticleWriter {
    fn create_article(&self, new_article: &NewArticle) -> RepositoryResult<Article>;
    fn update_article(&self, article_id: i32, updates: &UpdateArticle)
    -> RepositoryResult<Article>;
    fn delete_article(&self, article_id: i32) -> RepositoryResult<()>;
}
