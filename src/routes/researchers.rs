use actix_multipart::form::MultipartForm;
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::auth::AuthenticatedUser;
use crate::forms::researchers::{ResearcherForm, UploadResearchersForm};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::researchers::{self, ResearcherSearchQuery, ResearchersQuery};

#[get("/researchers")]
pub async fn list_researchers(
    params: web::Query<ResearchersQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match researchers::list_researchers(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "list researchers"),
    }
}

/// `?tag=Chile&tag=Historia&pending=...&decision=commit`
#[get("/researchers/search")]
pub async fn search_researchers(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    // `tag` repeats, which the default query extractor cannot collect.
    let query: ResearcherSearchQuery = match serde_html_form::from_str(req.query_string()) {
        Ok(query) => query,
        Err(err) => {
            return HttpResponse::UnprocessableEntity()
                .json(json!({ "error": format!("Solicitud no válida: {err}") }));
        }
    };

    match researchers::search_researchers(repo.get_ref(), &user, query) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => service_error_response(err, "search researchers"),
    }
}

#[post("/researchers/upload")]
pub async fn upload_researchers(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<UploadResearchersForm>,
) -> impl Responder {
    match researchers::import_researchers(repo.get_ref(), &user, form) {
        Ok(created) => HttpResponse::Created().json(json!({ "created": created })),
        Err(err) => service_error_response(err, "import researchers"),
    }
}

#[post("/researchers")]
pub async fn create_researcher(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<ResearcherForm>,
) -> impl Responder {
    match researchers::create_researcher(repo.get_ref(), &user, form.into_inner()) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => service_error_response(err, "create researcher"),
    }
}

#[get("/researchers/{id}")]
pub async fn get_researcher(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match researchers::get_researcher(repo.get_ref(), &user, path.into_inner()) {
        Ok(researcher) => HttpResponse::Ok().json(researcher),
        Err(err) => service_error_response(err, "load researcher"),
    }
}

#[put("/researchers/{id}")]
pub async fn update_researcher(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<ResearcherForm>,
) -> impl Responder {
    match researchers::update_researcher(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err) => service_error_response(err, "update researcher"),
    }
}

#[delete("/researchers/{id}")]
pub async fn delete_researcher(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match researchers::delete_researcher(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err, "delete researcher"),
    }
}
