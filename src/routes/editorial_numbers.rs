use actix_web::{HttpResponse, Responder, get, post, put, web};

use crate::auth::AuthenticatedUser;
use crate::dates::Clock;
use crate::forms::editorial_numbers::EditorialNumberForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::editorial_numbers::{self, EditorialNumbersQuery, OverlapQuery};

#[get("/editorialNumbers")]
pub async fn list_editorial_numbers(
    params: web::Query<EditorialNumbersQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match editorial_numbers::list_editorial_numbers(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "list editorial numbers"),
    }
}

/// The active number containing today, or `null`.
#[get("/editorialNumbers/current")]
pub async fn current_editorial_number(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
) -> impl Responder {
    match editorial_numbers::current_editorial_number(repo.get_ref(), &user, clock.get_ref()) {
        Ok(current) => HttpResponse::Ok().json(current),
        Err(err) => service_error_response(err, "load current editorial number"),
    }
}

#[get("/editorialNumbers/overlap")]
pub async fn check_date_overlap(
    params: web::Query<OverlapQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match editorial_numbers::check_date_overlap(repo.get_ref(), &user, params.into_inner()) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => service_error_response(err, "check editorial number overlap"),
    }
}

#[post("/editorialNumbers")]
pub async fn create_editorial_number(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditorialNumberForm>,
) -> impl Responder {
    match editorial_numbers::create_editorial_number(repo.get_ref(), &user, form.into_inner()) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => service_error_response(err, "create editorial number"),
    }
}

#[get("/editorialNumbers/{id}")]
pub async fn get_editorial_number(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match editorial_numbers::get_editorial_number(repo.get_ref(), &user, path.into_inner()) {
        Ok(number) => HttpResponse::Ok().json(number),
        Err(err) => service_error_response(err, "load editorial number"),
    }
}

#[put("/editorialNumbers/{id}")]
pub async fn update_editorial_number(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditorialNumberForm>,
) -> impl Responder {
    match editorial_numbers::update_editorial_number(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err) => service_error_response(err, "update editorial number"),
    }
}
