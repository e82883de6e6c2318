use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::auth::AuthenticatedUser;
use crate::dates::Clock;
use crate::forms::articles::ArticleForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::articles::{self, ArticlesQuery};

#[get("/articles")]
pub async fn list_articles(
    params: web::Query<ArticlesQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match articles::list_articles(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "list articles"),
    }
}

#[post("/articles")]
pub async fn create_article(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    form: web::Json<ArticleForm>,
) -> impl Responder {
    match articles::create_article(repo.get_ref(), &user, clock.get_ref(), form.into_inner()) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => service_error_response(err, "create article"),
    }
}

#[get("/articles/{id}")]
pub async fn get_article(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match articles::get_article(repo.get_ref(), &user, path.into_inner()) {
        Ok(article) => HttpResponse::Ok().json(article),
        Err(err) => service_error_response(err, "load article"),
    }
}

#[put("/articles/{id}")]
pub async fn update_article(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    form: web::Json<ArticleForm>,
) -> impl Responder {
    match articles::update_article(
        repo.get_ref(),
        &user,
        clock.get_ref(),
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err) => service_error_response(err, "update article"),
    }
}

#[delete("/articles/{id}")]
pub async fn delete_article(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match articles::delete_article(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err, "delete article"),
    }
}
