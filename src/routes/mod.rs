//! JSON endpoints. Every non-2xx answer carries `{ "error": "..." }`.

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod articles;
pub mod auth;
pub mod editorial_numbers;
pub mod languages;
pub mod researchers;
pub mod settings;
pub mod thematic_lines;
pub mod users;

const INTERNAL_ERROR_MESSAGE: &str =
    "Error interno del servidor. Inténtelo de nuevo más tarde.";

/// Translate a service failure into its HTTP answer. `action` names what
/// was attempted and only shows up in logs.
pub fn service_error_response(err: ServiceError, action: &str) -> HttpResponse {
    let message = err.to_string();

    match err {
        ServiceError::Unauthenticated => {
            HttpResponse::Unauthorized().json(json!({ "error": message }))
        }
        ServiceError::Unauthorized => HttpResponse::Forbidden().json(json!({ "error": message })),
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({ "error": message })),
        ServiceError::Conflict(_) => HttpResponse::Conflict().json(json!({ "error": message })),
        ServiceError::OverlapConflict { id, .. } => {
            HttpResponse::Conflict().json(json!({ "error": message, "conflict_id": id }))
        }
        ServiceError::ConfirmationRequired(pending) => {
            HttpResponse::Conflict().json(json!({ "error": message, "pending": pending }))
        }
        ServiceError::Form(_) => {
            HttpResponse::UnprocessableEntity().json(json!({ "error": message }))
        }
        ServiceError::Internal(detail) => {
            log::error!("Failed to {action}: {detail}");
            HttpResponse::InternalServerError().json(json!({ "error": INTERNAL_ERROR_MESSAGE }))
        }
    }
}

fn invalid_request(detail: String) -> actix_web::Error {
    let response = HttpResponse::UnprocessableEntity()
        .json(json!({ "error": format!("Solicitud no válida: {detail}") }));
    InternalError::from_response(detail, response).into()
}

/// Malformed JSON bodies answer 422 with the usual error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| invalid_request(err.to_string()))
}

/// Malformed query strings answer 422 with the usual error body.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err: QueryPayloadError, _req: &HttpRequest| invalid_request(err.to_string()))
}

/// Register every endpoint. Literal paths come before `{id}` paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(auth::login)
        .service(auth::me)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(editorial_numbers::list_editorial_numbers)
        .service(editorial_numbers::current_editorial_number)
        .service(editorial_numbers::check_date_overlap)
        .service(editorial_numbers::create_editorial_number)
        .service(editorial_numbers::get_editorial_number)
        .service(editorial_numbers::update_editorial_number)
        .service(researchers::list_researchers)
        .service(researchers::search_researchers)
        .service(researchers::upload_researchers)
        .service(researchers::create_researcher)
        .service(researchers::get_researcher)
        .service(researchers::update_researcher)
        .service(researchers::delete_researcher)
        .service(thematic_lines::list_thematic_lines)
        .service(thematic_lines::create_thematic_line)
        .service(thematic_lines::update_thematic_line)
        .service(thematic_lines::delete_thematic_line)
        .service(languages::list_languages)
        .service(languages::create_language)
        .service(languages::delete_language)
        .service(articles::list_articles)
        .service(articles::create_article)
        .service(articles::get_article)
        .service(articles::update_article)
        .service(articles::delete_article)
        .service(settings::get_view_mode)
        .service(settings::set_view_mode);
}
