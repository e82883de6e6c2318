use actix_web::{HttpResponse, Responder, get, post, web};

use crate::auth::{AuthenticatedUser, TokenIssuer};
use crate::forms::auth::LoginForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::auth as auth_service;

#[post("/auth/login")]
pub async fn login(
    repo: web::Data<DieselRepository>,
    issuer: web::Data<TokenIssuer>,
    form: web::Json<LoginForm>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), issuer.get_ref(), form.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => service_error_response(err, "log in"),
    }
}

#[get("/auth/me")]
pub async fn me(user: AuthenticatedUser, repo: web::Data<DieselRepository>) -> impl Responder {
    match auth_service::current_user(repo.get_ref(), &user) {
        Ok(current) => HttpResponse::Ok().json(current),
        Err(err) => service_error_response(err, "load current user"),
    }
}
