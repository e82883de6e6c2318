use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::auth::AuthenticatedUser;
use crate::forms::languages::LanguageForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::{ListQuery, languages};

#[get("/languages")]
pub async fn list_languages(
    params: web::Query<ListQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match languages::list_languages(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "list languages"),
    }
}

#[post("/languages")]
pub async fn create_language(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<LanguageForm>,
) -> impl Responder {
    match languages::create_language(repo.get_ref(), &user, form.into_inner()) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => service_error_response(err, "create language"),
    }
}

#[delete("/languages/{id}")]
pub async fn delete_language(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match languages::delete_language(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err, "delete language"),
    }
}
