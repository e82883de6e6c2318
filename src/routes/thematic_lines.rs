use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::auth::AuthenticatedUser;
use crate::forms::thematic_lines::ThematicLineForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::thematic_lines::{self, ThematicLinesQuery};

#[get("/thematicLines")]
pub async fn list_thematic_lines(
    params: web::Query<ThematicLinesQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match thematic_lines::list_thematic_lines(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "list thematic lines"),
    }
}

#[post("/thematicLines")]
pub async fn create_thematic_line(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<ThematicLineForm>,
) -> impl Responder {
    match thematic_lines::create_thematic_line(repo.get_ref(), &user, form.into_inner()) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => service_error_response(err, "create thematic line"),
    }
}

#[put("/thematicLines/{id}")]
pub async fn update_thematic_line(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<ThematicLineForm>,
) -> impl Responder {
    match thematic_lines::update_thematic_line(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err) => service_error_response(err, "update thematic line"),
    }
}

#[delete("/thematicLines/{id}")]
pub async fn delete_thematic_line(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match thematic_lines::delete_thematic_line(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err, "delete thematic line"),
    }
}
