use serde::Deserialize;

use crate::auth::AuthenticatedUser;
use crate::domain::article::ArticleListQuery;
use crate::domain::researcher::ResearcherListQuery;
use crate::domain::thematic_line::{ThematicLine, ThematicLineListQuery};
use crate::forms::thematic_lines::ThematicLineForm;
use crate::pagination::{Page, PageRequest, paginate_request};
use crate::repository::{ArticleReader, ResearcherReader, ThematicLineReader, ThematicLineWriter};
use crate::roles::Action;
use crate::services::{ServiceError, ServiceResult, ensure_allowed, non_blank};

#[derive(Debug, Default, Deserialize)]
pub struct ThematicLinesQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub previous_per_page: Option<usize>,
    #[serde(default)]
    pub active_only: bool,
}

pub fn list_thematic_lines<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ThematicLinesQuery,
) -> ServiceResult<Page<ThematicLine>>
where
    R: ThematicLineReader + ?Sized,
{
    ensure_allowed(user, Action::ViewRecords)?;

    let mut list_query = ThematicLineListQuery::default();
    if let Some(term) = non_blank(query.search.as_deref()) {
        list_query = list_query.search(term);
    }
    if query.active_only {
        list_query = list_query.active_only();
    }

    let lines = repo.list_thematic_lines(list_query)?;
    let request = PageRequest::from_params(query.page, query.per_page, query.previous_per_page);
    Ok(paginate_request(lines, request))
}

pub fn create_thematic_line<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: ThematicLineForm,
) -> ServiceResult<ThematicLine>
where
    R: ThematicLineWriter + ?Sized,
{
    ensure_allowed(user, Action::ManageCatalog)?;

    let new_line = form
        .into_new_thematic_line()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_thematic_line(&new_line)
        .map_err(|err| duplicate_name(err.into(), &new_line.name))
}

pub fn update_thematic_line<R>(
    repo: &R,
    user: &AuthenticatedUser,
    line_id: i32,
    form: ThematicLineForm,
) -> ServiceResult<ThematicLine>
where
    R: ThematicLineReader + ThematicLineWriter + ?Sized,
{
    ensure_allowed(user, Action::ManageCatalog)?;

    let updates = form
        .into_update()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_thematic_line_by_id(line_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.update_thematic_line(line_id, &updates)
        .map_err(|err| duplicate_name(err.into(), &updates.name))
}

/// Lines still assigned to a researcher or an article stay.
pub fn delete_thematic_line<R>(
    repo: &R,
    user: &AuthenticatedUser,
    line_id: i32,
) -> ServiceResult<()>
where
    R: ThematicLineWriter + ResearcherReader + ArticleReader + ?Sized,
{
    ensure_allowed(user, Action::DeleteRecords)?;

    let researchers =
        repo.list_researchers(ResearcherListQuery::default().thematic_lines(vec![line_id]))?;
    let articles = repo.list_articles(ArticleListQuery::default().thematic_line(line_id))?;
    if !researchers.is_empty() || !articles.is_empty() {
        return Err(ServiceError::Conflict(
            "La línea temática está asignada a investigadores o artículos.".to_string(),
        ));
    }

    Ok(repo.delete_thematic_line(line_id)?)
}

fn duplicate_name(err: ServiceError, name: &str) -> ServiceError {
    match err {
        ServiceError::Conflict(_) => {
            ServiceError::Conflict(format!("Ya existe una línea temática llamada «{name}»."))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::thematic_line::NewThematicLine;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockCatalogRepository;
    use crate::services::test_support::{assistant, editor};

    fn line(id: i32, name: &str) -> ThematicLine {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("timestamp");

        ThematicLine {
            id,
            name: name.into(),
            description: None,
            is_active: true,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    fn form(name: &str) -> ThematicLineForm {
        ThematicLineForm {
            name: name.into(),
            description: None,
            is_active: None,
        }
    }

    #[test]
    fn list_passes_filters() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list_thematic_lines()
            .withf(|query: &ThematicLineListQuery| {
                query.active_only && query.search.as_deref() == Some("hist")
            })
            .returning(|_| Ok(vec![line(1, "Historia")]));

        let query = ThematicLinesQuery {
            search: Some(" hist ".into()),
            active_only: true,
            ..ThematicLinesQuery::default()
        };
        let page = list_thematic_lines(&repo, &assistant(), query).expect("page");
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn assistants_cannot_create() {
        let repo = MockCatalogRepository::new();

        assert!(matches!(
            create_thematic_line(&repo, &assistant(), form("Historia")),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn duplicate_name_is_reported() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_create_thematic_line()
            .withf(|new: &NewThematicLine| new.name == "Historia")
            .returning(|_| Err(RepositoryError::Conflict));

        match create_thematic_line(&repo, &editor(), form("  Historia ")) {
            Err(ServiceError::Conflict(message)) => assert!(message.contains("Historia")),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn line_assigned_to_researchers_is_kept() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list_researchers()
            .withf(|query: &ResearcherListQuery| query.thematic_line_ids == vec![3])
            .returning(|_| {
                let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .expect("timestamp");
                Ok(vec![crate::domain::researcher::Researcher {
                    id: 1,
                    first_name: "Ana".into(),
                    last_name: "Gómez".into(),
                    email: "ana@uni.edu".into(),
                    affiliation: None,
                    country: None,
                    thematic_line_id: Some(3),
                    language_id: None,
                    is_reviewer: false,
                    created_at: timestamp,
                    updated_at: timestamp,
                }])
            });
        repo.expect_list_articles()
            .withf(|query: &ArticleListQuery| query.thematic_line_id == Some(3))
            .returning(|_| Ok(Vec::new()));
        repo.expect_delete_thematic_line().never();

        assert!(matches!(
            delete_thematic_line(&repo, &editor(), 3),
            Err(ServiceError::Conflict(_))
        ));
    }

    #[test]
    fn unused_line_is_deleted() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list_researchers().returning(|_| Ok(Vec::new()));
        repo.expect_list_articles().returning(|_| Ok(Vec::new()));
        repo.expect_delete_thematic_line()
            .times(1)
            .returning(|_| Ok(()));

        assert!(delete_thematic_line(&repo, &editor(), 3).is_ok());
    }
}
