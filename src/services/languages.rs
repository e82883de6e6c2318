use crate::auth::AuthenticatedUser;
use crate::domain::article::ArticleListQuery;
use crate::domain::language::Language;
use crate::domain::researcher::ResearcherListQuery;
use crate::forms::languages::LanguageForm;
use crate::pagination::{Page, paginate_request};
use crate::repository::{ArticleReader, LanguageReader, LanguageWriter, ResearcherReader};
use crate::roles::Action;
use crate::services::{ListQuery, ServiceError, ServiceResult, ensure_allowed};

pub fn list_languages<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ListQuery,
) -> ServiceResult<Page<Language>>
where
    R: LanguageReader + ?Sized,
{
    ensure_allowed(user, Action::ViewRecords)?;

    let mut languages = repo.list_languages()?;

    if let Some(term) = query.search_term() {
        let term = term.to_lowercase();
        languages.retain(|language| language.name.to_lowercase().contains(&term));
    }

    Ok(paginate_request(languages, query.page_request()))
}

pub fn create_language<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: LanguageForm,
) -> ServiceResult<Language>
where
    R: LanguageWriter + ?Sized,
{
    ensure_allowed(user, Action::ManageCatalog)?;

    let new_language = form
        .into_new_language()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_language(&new_language)
        .map_err(|err| match ServiceError::from(err) {
            ServiceError::Conflict(_) => ServiceError::Conflict(format!(
                "Ya existe un idioma llamado «{}».",
                new_language.name
            )),
            other => other,
        })
}

/// Languages still assigned to a researcher or an article stay.
pub fn delete_language<R>(
    repo: &R,
    user: &AuthenticatedUser,
    language_id: i32,
) -> ServiceResult<()>
where
    R: LanguageWriter + ResearcherReader + ArticleReader + ?Sized,
{
    ensure_allowed(user, Action::DeleteRecords)?;

    let researchers =
        repo.list_researchers(ResearcherListQuery::default().languages(vec![language_id]))?;
    let articles = repo.list_articles(ArticleListQuery::default().language(language_id))?;
    if !researchers.is_empty() || !articles.is_empty() {
        return Err(ServiceError::Conflict(
            "El idioma está asignado a investigadores o artículos.".to_string(),
        ));
    }

    Ok(repo.delete_language(language_id)?)
}
