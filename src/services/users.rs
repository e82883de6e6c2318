use crate::auth::{AuthenticatedUser, hash_password};
use crate::domain::user::{User, UserListQuery};
use crate::forms::users::{AddUserForm, EditUserForm};
use crate::pagination::{Page, paginate_request};
use crate::repository::{UserReader, UserWriter};
use crate::roles::Action;
use crate::services::{ListQuery, ServiceError, ServiceResult, ensure_allowed};

pub fn list_users<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ListQuery,
) -> ServiceResult<Page<User>>
where
    R: UserReader + ?Sized,
{
    ensure_allowed(user, Action::ManageUsers)?;

    let mut list_query = UserListQuery::default();
    if let Some(term) = query.search_term() {
        list_query = list_query.search(term);
    }

    let users = repo.list_users(list_query)?;
    Ok(paginate_request(users, query.page_request()))
}

pub fn get_user<R>(repo: &R, user: &AuthenticatedUser, user_id: i32) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    ensure_allowed(user, Action::ManageUsers)?;

    repo.get_user_by_id(user_id)?.ok_or(ServiceError::NotFound)
}

pub fn create_user<R>(repo: &R, user: &AuthenticatedUser, form: AddUserForm) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    ensure_allowed(user, Action::ManageUsers)?;

    let payload = form
        .into_payload()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_user_by_email(&payload.email)?.is_some() {
        return Err(duplicate_email(&payload.email));
    }

    let password_hash = hash_password(&payload.password)?;
    let email = payload.email.clone();
    let new_user = payload.into_new_user(password_hash);

    repo.create_user(&new_user).map_err(|err| match ServiceError::from(err) {
        ServiceError::Conflict(_) => duplicate_email(&email),
        other => other,
    })
}

pub fn update_user<R>(
    repo: &R,
    user: &AuthenticatedUser,
    user_id: i32,
    form: EditUserForm,
) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    ensure_allowed(user, Action::ManageUsers)?;

    let (mut updates, password) = form
        .into_update()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if user_id == user.id && updates.is_active == Some(false) {
        return Err(ServiceError::Form(
            "No puede desactivar su propia cuenta.".to_string(),
        ));
    }

    if repo.get_user_by_id(user_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    if let Some(password) = password {
        updates.password_hash = Some(hash_password(&password)?);
    }

    Ok(repo.update_user(user_id, &updates)?)
}

pub fn delete_user<R>(repo: &R, user: &AuthenticatedUser, user_id: i32) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    ensure_allowed(user, Action::ManageUsers)?;

    if user_id == user.id {
        return Err(ServiceError::Form(
            "No puede eliminar su propia cuenta.".to_string(),
        ));
    }

    Ok(repo.delete_user(user_id)?)
}

fn duplicate_email(email: &str) -> ServiceError {
    ServiceError::Conflict(format!("Ya existe un usuario con el correo {email}."))
}
