use actix_web::{HttpResponse, Responder, get, put, web};

use crate::auth::AuthenticatedUser;
use crate::forms::settings::ViewModeForm;
use crate::routes::service_error_response;
use crate::services::settings as settings_service;
use crate::settings::SharedPreferences;

#[get("/settings/view-mode")]
pub async fn get_view_mode(
    user: AuthenticatedUser,
    preferences: web::Data<SharedPreferences>,
) -> impl Responder {
    match settings_service::get_ui_settings(preferences.get_ref(), &user) {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(err) => service_error_response(err, "read view mode"),
    }
}

#[put("/settings/view-mode")]
pub async fn set_view_mode(
    user: AuthenticatedUser,
    preferences: web::Data<SharedPreferences>,
    form: web::Json<ViewModeForm>,
) -> impl Responder {
    match settings_service::set_view_mode(preferences.get_ref(), &user, form.into_inner()) {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(err) => service_error_response(err, "save view mode"),
    }
}
