//! HTTP handlers of the demo listing server.

use actix_web::{HttpResponse, http::header};
use log::error;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod items;

/// Renders `template` or answers 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Maps a service failure onto a response, logging it on the way.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    if err.is_client_error() {
        HttpResponse::BadRequest().body(err.to_string())
    } else {
        error!("Request failed: {err}");
        HttpResponse::InternalServerError().finish()
    }
}
