//! Researchers, their tag-based search and CSV import.

use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::domain::article::ArticleListQuery;
use crate::domain::language::Language;
use crate::domain::researcher::{Researcher, ResearcherListQuery};
use crate::domain::thematic_line::{ThematicLine, ThematicLineListQuery};
use crate::filters::{FilterTag, FilterTagSet, KnownValues, PendingDecision, SearchCriteria};
use crate::forms::researchers::{ResearcherForm, UploadResearchersForm};
use crate::pagination::{Page, PageRequest, paginate_request};
use crate::repository::{
    ArticleReader, LanguageReader, ResearcherReader, ResearcherWriter, ThematicLineReader,
};
use crate::roles::Action;
use crate::services::{ListQuery, ServiceError, ServiceResult, ensure_allowed, non_blank};

#[derive(Debug, Default, Deserialize)]
pub struct ResearchersQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub previous_per_page: Option<usize>,
    #[serde(default)]
    pub reviewers_only: bool,
}

/// Query of the tag search. `tag` may repeat.
#[derive(Debug, Default, Deserialize)]
pub struct ResearcherSearchQuery {
    #[serde(default)]
    pub tag: Vec<String>,
    /// Text typed in the filter box but not yet added as a tag.
    pub pending: Option<String>,
    pub decision: Option<PendingDecision>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub previous_per_page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ResearcherSearchResult {
    pub tags: Vec<FilterTag>,
    pub results: Page<Researcher>,
}

pub fn list_researchers<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ResearchersQuery,
) -> ServiceResult<Page<Researcher>>
where
    R: ResearcherReader + ?Sized,
{
    ensure_allowed(user, Action::ViewRecords)?;

    let paging = ListQuery {
        search: query.search,
        page: query.page,
        per_page: query.per_page,
        previous_per_page: query.previous_per_page,
    };

    let mut list_query = ResearcherListQuery::default();
    if let Some(term) = paging.search_term() {
        list_query = list_query.search(term);
    }
    if query.reviewers_only {
        list_query = list_query.reviewers_only();
    }

    let researchers = repo.list_researchers(list_query)?;
    Ok(paginate_request(researchers, paging.page_request()))
}

/// Classify the requested tags against the known thematic lines, languages
/// and countries, then search with them.
pub fn search_researchers<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ResearcherSearchQuery,
) -> ServiceResult<ResearcherSearchResult>
where
    R: ResearcherReader + ThematicLineReader + LanguageReader + ?Sized,
{
    ensure_allowed(user, Action::ViewRecords)?;

    let thematic_lines = repo.list_thematic_lines(ThematicLineListQuery::default())?;
    let languages = repo.list_languages()?;
    let known = KnownValues {
        thematic_lines: thematic_lines.iter().map(|line| line.name.clone()).collect(),
        languages: languages.iter().map(|language| language.name.clone()).collect(),
        countries: repo.list_countries()?,
    };

    let mut tags = FilterTagSet::new();
    for raw in &query.tag {
        tags.add_known(raw, &known);
    }

    let pending = non_blank(query.pending.as_deref());
    let criteria = tags
        .prepare_search(pending.as_deref(), query.decision, &known)
        .map_err(|err| ServiceError::ConfirmationRequired(err.pending))?;

    let request = PageRequest::from_params(query.page, query.per_page, query.previous_per_page);
    let list_query = criteria_to_query(&criteria, &thematic_lines, &languages, &known.countries);
    let researchers = repo.list_researchers(list_query)?;

    Ok(ResearcherSearchResult {
        tags: tags.tags().to_vec(),
        results: paginate_request(researchers, request),
    })
}

/// Tags carry one canonical label, but stored values may differ from it in
/// case or surrounding spaces. Every stored variant of a label is kept.
fn criteria_to_query(
    criteria: &SearchCriteria,
    thematic_lines: &[ThematicLine],
    languages: &[Language],
    countries: &[String],
) -> ResearcherListQuery {
    let thematic_line_ids = thematic_lines
        .iter()
        .filter(|line| matches_any(&line.name, &criteria.thematic_lines))
        .map(|line| line.id)
        .collect();

    let language_ids = languages
        .iter()
        .filter(|language| matches_any(&language.name, &criteria.languages))
        .map(|language| language.id)
        .collect();

    let countries = countries
        .iter()
        .filter(|country| matches_any(country, &criteria.countries))
        .cloned()
        .collect();

    ResearcherListQuery::default()
        .thematic_lines(thematic_line_ids)
        .languages(language_ids)
        .countries(countries)
        .terms(criteria.terms.clone())
}

fn matches_any(stored: &str, labels: &[String]) -> bool {
    let stored = stored.trim().to_lowercase();
    labels
        .iter()
        .any(|label| label.trim().to_lowercase() == stored)
}

pub fn get_researcher<R>(
    repo: &R,
    user: &AuthenticatedUser,
    researcher_id: i32,
) -> ServiceResult<Researcher>
where
    R: ResearcherReader + ?Sized,
{
    ensure_allowed(user, Action::ViewRecords)?;

    repo.get_researcher_by_id(researcher_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_researcher<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: ResearcherForm,
) -> ServiceResult<Researcher>
where
    R: ResearcherWriter + ?Sized,
{
    ensure_allowed(user, Action::ManageResearchers)?;

    let new_researcher = form
        .into_new_researcher()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_researcher(&new_researcher)
        .map_err(|err| duplicate_email(err.into(), &new_researcher.email))
}

pub fn update_researcher<R>(
    repo: &R,
    user: &AuthenticatedUser,
    researcher_id: i32,
    form: ResearcherForm,
) -> ServiceResult<Researcher>
where
    R: ResearcherReader + ResearcherWriter + ?Sized,
{
    ensure_allowed(user, Action::ManageResearchers)?;

    let updates = form
        .into_update()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_researcher_by_id(researcher_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.update_researcher(researcher_id, &updates)
        .map_err(|err| duplicate_email(err.into(), &updates.email))
}

/// Researchers still named as author or reviewer of an article stay.
pub fn delete_researcher<R>(
    repo: &R,
    user: &AuthenticatedUser,
    researcher_id: i32,
) -> ServiceResult<()>
where
    R: ResearcherWriter + ArticleReader + ?Sized,
{
    ensure_allowed(user, Action::DeleteRecords)?;

    let authored = repo.list_articles(ArticleListQuery::default().author(researcher_id))?;
    let reviewing = repo.list_articles(ArticleListQuery::default().reviewer(researcher_id))?;
    if !authored.is_empty() || !reviewing.is_empty() {
        return Err(ServiceError::Conflict(
            "El investigador tiene artículos asociados como autor o revisor.".to_string(),
        ));
    }

    Ok(repo.delete_researcher(researcher_id)?)
}

/// Import every row of the uploaded CSV, or none of them.
pub fn import_researchers<R>(
    repo: &R,
    user: &AuthenticatedUser,
    mut form: UploadResearchersForm,
) -> ServiceResult<usize>
where
    R: ResearcherWriter + ?Sized,
{
    ensure_allowed(user, Action::ManageResearchers)?;

    let researchers = form
        .parse()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_researchers(&researchers).map_err(|err| match ServiceError::from(err) {
        ServiceError::Conflict(_) => ServiceError::Conflict(
            "El archivo contiene correos que ya están registrados.".to_string(),
        ),
        other => other,
    })
}

fn duplicate_email(err: ServiceError, email: &str) -> ServiceError {
    match err {
        ServiceError::Conflict(_) => {
            ServiceError::Conflict(format!("Ya existe un investigador con el correo {email}."))
        }
        other => other,
    }
}
