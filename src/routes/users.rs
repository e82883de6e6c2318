use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::auth::AuthenticatedUser;
use crate::forms::users::{AddUserForm, EditUserForm};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::{ListQuery, users};

#[get("/users")]
pub async fn list_users(
    params: web::Query<ListQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users::list_users(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "list users"),
    }
}

#[post("/users")]
pub async fn create_user(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddUserForm>,
) -> impl Responder {
    match users::create_user(repo.get_ref(), &user, form.into_inner()) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => service_error_response(err, "create user"),
    }
}

#[get("/users/{id}")]
pub async fn get_user(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users::get_user(repo.get_ref(), &user, path.into_inner()) {
        Ok(found) => HttpResponse::Ok().json(found),
        Err(err) => service_error_response(err, "load user"),
    }
}

#[put("/users/{id}")]
pub async fn update_user(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditUserForm>,
) -> impl Responder {
    match users::update_user(repo.get_ref(), &user, path.into_inner(), form.into_inner()) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err) => service_error_response(err, "update user"),
    }
}

#[delete("/users/{id}")]
pub async fn delete_user(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users::delete_user(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err, "delete user"),
    }
}
