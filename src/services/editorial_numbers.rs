//! Editorial numbers and the overlap rule between their date windows.

use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::dates::{Clock, format_display_date};
use crate::domain::editorial_number::{
    EditorialNumber, EditorialNumberListQuery, UpdateEditorialNumber,
};
use crate::forms::editorial_numbers::{EditorialNumberForm, parse_range};
use crate::overlap::{DateInterval, DateRange, find_overlap};
use crate::pagination::{Page, paginate_request};
use crate::repository::{EditorialNumberReader, EditorialNumberWriter};
use crate::roles::Action;
use crate::services::{ListQuery, ServiceError, ServiceResult, ensure_allowed};

#[derive(Debug, Default, Deserialize)]
pub struct EditorialNumbersQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub previous_per_page: Option<usize>,
    #[serde(default)]
    pub active_only: bool,
}

/// Query of the overlap endpoint. Dates use the display form.
#[derive(Debug, Deserialize)]
pub struct OverlapQuery {
    pub start: String,
    pub end: String,
    pub exclude_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct OverlapReport {
    pub overlaps: bool,
    pub conflict: Option<EditorialNumber>,
}

pub fn list_editorial_numbers<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: EditorialNumbersQuery,
) -> ServiceResult<Page<EditorialNumber>>
where
    R: EditorialNumberReader + ?Sized,
{
    ensure_allowed(user, Action::ViewRecords)?;

    let paging = ListQuery {
        search: query.search,
        page: query.page,
        per_page: query.per_page,
        previous_per_page: query.previous_per_page,
    };

    let mut list_query = EditorialNumberListQuery::default();
    if let Some(term) = paging.search_term() {
        list_query = list_query.search(term);
    }
    if query.active_only {
        list_query = list_query.active_only();
    }

    let items = repo.list_editorial_numbers(list_query)?;
    Ok(paginate_request(items, paging.page_request()))
}

pub fn get_editorial_number<R>(
    repo: &R,
    user: &AuthenticatedUser,
    number_id: i32,
) -> ServiceResult<EditorialNumber>
where
    R: EditorialNumberReader + ?Sized,
{
    ensure_allowed(user, Action::ViewRecords)?;

    repo.get_editorial_number_by_id(number_id)?
        .ok_or(ServiceError::NotFound)
}

/// Active editorial number whose window contains today, if any.
pub fn current_editorial_number<R, C>(
    repo: &R,
    user: &AuthenticatedUser,
    clock: &C,
) -> ServiceResult<Option<EditorialNumber>>
where
    R: EditorialNumberReader + ?Sized,
    C: Clock + ?Sized,
{
    ensure_allowed(user, Action::ViewRecords)?;

    let today = clock.today();
    let numbers = repo.list_editorial_numbers(EditorialNumberListQuery::default().active_only())?;

    Ok(numbers
        .into_iter()
        .find(|number| DateInterval::from(number).contains(today)))
}

/// Report the first active editorial number colliding with the given window.
pub fn check_date_overlap<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: OverlapQuery,
) -> ServiceResult<OverlapReport>
where
    R: EditorialNumberReader + ?Sized,
{
    ensure_allowed(user, Action::ViewRecords)?;

    let range =
        parse_range(&query.start, &query.end).map_err(|err| ServiceError::Form(err.to_string()))?;

    let conflict = find_conflict(repo, &range, query.exclude_id)?;

    Ok(OverlapReport {
        overlaps: conflict.is_some(),
        conflict,
    })
}

pub fn create_editorial_number<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: EditorialNumberForm,
) -> ServiceResult<EditorialNumber>
where
    R: EditorialNumberReader + EditorialNumberWriter + ?Sized,
{
    ensure_allowed(user, Action::ManageEditorialNumbers)?;

    let (new_number, range) = form
        .into_new_editorial_number()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if new_number.is_active {
        reject_overlap(repo, &range, None)?;
    }

    Ok(repo.create_editorial_number(&new_number)?)
}

pub fn update_editorial_number<R>(
    repo: &R,
    user: &AuthenticatedUser,
    number_id: i32,
    form: EditorialNumberForm,
) -> ServiceResult<EditorialNumber>
where
    R: EditorialNumberReader + EditorialNumberWriter + ?Sized,
{
    ensure_allowed(user, Action::ManageEditorialNumbers)?;

    let (new_number, range) = form
        .into_new_editorial_number()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_editorial_number_by_id(number_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    if new_number.is_active {
        reject_overlap(repo, &range, Some(number_id))?;
    }

    let updates = UpdateEditorialNumber::from_new(new_number);
    Ok(repo.update_editorial_number(number_id, &updates)?)
}

/// Runs against a fresh snapshot. A write landing between this check and
/// the caller's own write is not detected.
fn find_conflict<R>(
    repo: &R,
    range: &DateRange,
    exclude_id: Option<i32>,
) -> ServiceResult<Option<EditorialNumber>>
where
    R: EditorialNumberReader + ?Sized,
{
    let numbers = repo.list_editorial_numbers(EditorialNumberListQuery::default())?;
    let intervals: Vec<DateInterval> = numbers.iter().map(DateInterval::from).collect();

    let conflict_id = find_overlap(range, &intervals, exclude_id).map(|interval| interval.id);

    Ok(conflict_id.and_then(|id| numbers.into_iter().find(|number| number.id == id)))
}

fn reject_overlap<R>(repo: &R, range: &DateRange, exclude_id: Option<i32>) -> ServiceResult<()>
where
    R: EditorialNumberReader + ?Sized,
{
    match find_conflict(repo, range, exclude_id)? {
        Some(conflict) => Err(ServiceError::OverlapConflict {
            id: conflict.id,
            number: conflict.number,
            start_date: format_display_date(conflict.start_date),
            end_date: format_display_date(conflict.end_date),
        }),
        None => Ok(()),
    }
}
