use serde::Deserialize;

use crate::auth::AuthenticatedUser;
use crate::dates::Clock;
use crate::domain::article::{Article, ArticleListQuery, ArticleStatus};
use crate::forms::articles::ArticleForm;
use crate::pagination::{Page, PageRequest, paginate_request};
use crate::repository::{ArticleReader, ArticleWriter, EditorialNumberReader, ResearcherReader};
use crate::roles::Action;
use crate::services::{ServiceError, ServiceResult, ensure_allowed, non_blank};

#[derive(Debug, Default, Deserialize)]
pub struct ArticlesQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub previous_per_page: Option<usize>,
    pub status: Option<ArticleStatus>,
    pub editorial_number_id: Option<i32>,
    pub author_id: Option<i32>,
}

pub fn list_articles<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ArticlesQuery,
) -> ServiceResult<Page<Article>>
where
    R: ArticleReader + ?Sized,
{
    ensure_allowed(user, Action::ViewRecords)?;

    let mut list_query = ArticleListQuery::default();
    if let Some(term) = non_blank(query.search.as_deref()) {
        list_query = list_query.search(term);
    }
    if let Some(status) = query.status {
        list_query = list_query.status(status);
    }
    if let Some(editorial_number_id) = query.editorial_number_id {
        list_query = list_query.editorial_number(editorial_number_id);
    }
    if let Some(author_id) = query.author_id {
        list_query = list_query.author(author_id);
    }

    let articles = repo.list_articles(list_query)?;
    let request = PageRequest::from_params(query.page, query.per_page, query.previous_per_page);
    Ok(paginate_request(articles, request))
}

pub fn get_article<R>(repo: &R, user: &AuthenticatedUser, article_id: i32) -> ServiceResult<Article>
where
    R: ArticleReader + ?Sized,
{
    ensure_allowed(user, Action::ViewRecords)?;

    repo.get_article_by_id(article_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_article<R, C>(
    repo: &R,
    user: &AuthenticatedUser,
    clock: &C,
    form: ArticleForm,
) -> ServiceResult<Article>
where
    R: ArticleWriter + ResearcherReader + EditorialNumberReader + ?Sized,
    C: Clock + ?Sized,
{
    ensure_allowed(user, Action::ManageArticles)?;

    let new_article = form
        .into_new_article(clock)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    check_references(
        repo,
        new_article.author_id,
        new_article.reviewer_id,
        new_article.editorial_number_id,
    )?;

    Ok(repo.create_article(&new_article)?)
}

pub fn update_article<R, C>(
    repo: &R,
    user: &AuthenticatedUser,
    clock: &C,
    article_id: i32,
    form: ArticleForm,
) -> ServiceResult<Article>
where
    R: ArticleReader + ArticleWriter + ResearcherReader + EditorialNumberReader + ?Sized,
    C: Clock + ?Sized,
{
    ensure_allowed(user, Action::ManageArticles)?;

    let updates = form
        .into_update(clock)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_article_by_id(article_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    check_references(
        repo,
        updates.author_id,
        updates.reviewer_id,
        updates.editorial_number_id,
    )?;

    Ok(repo.update_article(article_id, &updates)?)
}

pub fn delete_article<R>(repo: &R, user: &AuthenticatedUser, article_id: i32) -> ServiceResult<()>
where
    R: ArticleWriter + ?Sized,
{
    ensure_allowed(user, Action::DeleteRecords)?;

    Ok(repo.delete_article(article_id)?)
}

/// Referenced author, reviewer and editorial number must exist; the
/// reviewer must accept reviews.
fn check_references<R>(
    repo: &R,
    author_id: i32,
    reviewer_id: Option<i32>,
    editorial_number_id: Option<i32>,
) -> ServiceResult<()>
where
    R: ResearcherReader + EditorialNumberReader + ?Sized,
{
    if repo.get_researcher_by_id(author_id)?.is_none() {
        return Err(ServiceError::Form("El autor indicado no existe.".to_string()));
    }

    if let Some(reviewer_id) = reviewer_id {
        match repo.get_researcher_by_id(reviewer_id)? {
            Some(reviewer) if reviewer.is_reviewer => {}
            Some(_) => {
                return Err(ServiceError::Form(
                    "El investigador indicado no es revisor.".to_string(),
                ));
            }
            None => {
                return Err(ServiceError::Form("El revisor indicado no existe.".to_string()));
            }
        }
    }

    if let Some(editorial_number_id) = editorial_number_id {
        if repo.get_editorial_number_by_id(editorial_number_id)?.is_none() {
            return Err(ServiceError::Form(
                "El número editorial indicado no existe.".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::dates::FixedClock;
    use crate::domain::article::NewArticle;
    use crate::domain::researcher::Researcher;
    use crate::repository::mock::MockArticleRepository;
    use crate::services::test_support::{assistant, editor};

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("timestamp")
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 5, 20).expect("date"))
    }

    fn researcher(id: i32, is_reviewer: bool) -> Researcher {
        Researcher {
            id,
            first_name: "Luis".into(),
            last_name: "Mora".into(),
            email: format!("r{id}@uni.edu"),
            affiliation: None,
            country: None,
            thematic_line_id: None,
            language_id: None,
            is_reviewer,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn form(reviewer_id: Option<i32>) -> ArticleForm {
        ArticleForm {
            title: "Cartografías del sur".into(),
            summary: None,
            author_id: 1,
            reviewer_id,
            thematic_line_id: None,
            language_id: None,
            editorial_number_id: None,
            status: ArticleStatus::Received,
            submitted_on: None,
        }
    }

    fn article_from(new: &NewArticle) -> Article {
        Article {
            id: 10,
            title: new.title.clone(),
            summary: new.summary.clone(),
            author_id: new.author_id,
            reviewer_id: new.reviewer_id,
            thematic_line_id: new.thematic_line_id,
            language_id: new.language_id,
            editorial_number_id: new.editorial_number_id,
            status: new.status,
            submitted_on: new.submitted_on,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    #[test]
    fn assistants_can_register_articles() {
        let mut repo = MockArticleRepository::new();
        repo.expect_get_researcher_by_id()
            .returning(|id| Ok(Some(researcher(id, id == 2))));
        repo.expect_create_article()
            .times(1)
            .withf(|new: &NewArticle| new.submitted_on == clock().0)
            .returning(|new| Ok(article_from(new)));

        let created = create_article(&repo, &assistant(), &clock(), form(Some(2))).expect("created");
        assert_eq!(created.reviewer_id, Some(2));
    }

    #[test]
    fn reviewer_must_accept_reviews() {
        let mut repo = MockArticleRepository::new();
        repo.expect_get_researcher_by_id()
            .returning(|id| Ok(Some(researcher(id, false))));
        repo.expect_create_article().never();

        match create_article(&repo, &editor(), &clock(), form(Some(3))) {
            Err(ServiceError::Form(message)) => assert!(message.contains("no es revisor")),
            other => panic!("expected form error, got {other:?}"),
        }
    }

    #[test]
    fn missing_author_is_a_form_error() {
        let mut repo = MockArticleRepository::new();
        repo.expect_get_researcher_by_id().returning(|_| Ok(None));

        assert!(matches!(
            create_article(&repo, &editor(), &clock(), form(None)),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn list_forwards_status_filter() {
        let mut repo = MockArticleRepository::new();
        repo.expect_list_articles()
            .withf(|query: &ArticleListQuery| query.status == Some(ArticleStatus::Published))
            .returning(|_| Ok(Vec::new()));

        let query = ArticlesQuery {
            status: Some(ArticleStatus::Published),
            ..ArticlesQuery::default()
        };
        let page = list_articles(&repo, &assistant(), query).expect("page");
        assert_eq!(page.total_items, 0);
    }

    #[test]
    fn assistants_cannot_delete() {
        let repo = MockArticleRepository::new();

        assert!(matches!(
            delete_article(&repo, &assistant(), 10),
            Err(ServiceError::Unauthorized)
        ));
    }
}
