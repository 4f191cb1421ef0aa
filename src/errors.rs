use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

use crate::editor::EditError;
use crate::gateway::GatewayError;

const NOT_FOUND_PAGE: &str = include_str!("../templates/errors/404.html");

#[derive(Debug)]
pub enum AppError {
    Gateway(GatewayError),
    Template(askama::Error),
    Session(String),
    Csrf,
    BadRequest(String),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Gateway(e) => write!(f, "Gateway error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Csrf => write!(f, "Invalid or missing CSRF token"),
            AppError::BadRequest(e) => write!(f, "Bad request: {e}"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Csrf => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => not_found_page(),
            AppError::Csrf => HttpResponse::Forbidden().body(self.to_string()),
            AppError::BadRequest(_) => HttpResponse::BadRequest().body(self.to_string()),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::NotFound => AppError::NotFound,
            other => AppError::Gateway(other),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<EditError> for AppError {
    fn from(e: EditError) -> Self {
        match e {
            EditError::Slide(e) => AppError::BadRequest(e.to_string()),
            EditError::Gateway(e) => e.into(),
            EditError::SlideNotFound => AppError::NotFound,
        }
    }
}

/// Render an askama template as a 200 HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    render_with_status(StatusCode::OK, tmpl)
}

pub fn render_with_status(status: StatusCode, tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}

pub fn not_found_page() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(NOT_FOUND_PAGE)
}
