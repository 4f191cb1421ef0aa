pub mod api_v1;
pub mod paths;
pub mod present_handlers;
pub mod presentation_handlers;
pub mod slide_handlers;

use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::editor::{DeckEditor, EditError};
use crate::errors::{AppError, render_with_status};
use crate::gateway::Gateway;
use crate::session::flash;
use crate::templates_structs::{PageContext, PresentationMissingTemplate};

pub const SAVE_FAILED: &str = "Could not save your changes. Please try again.";

/// Form body carrying nothing but the CSRF token.
#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(|| async { see_other(paths::PRESENTATIONS) }))
        .route("/presentations", web::get().to(presentation_handlers::list))
        .route("/presentations", web::post().to(presentation_handlers::create))
        .route("/presentations/{id}", web::get().to(presentation_handlers::editor))
        .route("/presentations/{id}", web::post().to(presentation_handlers::update))
        .route("/presentations/{id}/theme", web::post().to(presentation_handlers::update_theme))
        .route("/presentations/{id}/present", web::get().to(present_handlers::present))
        .route("/presentations/{id}/slides", web::post().to(slide_handlers::add_slide))
        .route("/presentations/{id}/slides/{slide_id}", web::post().to(slide_handlers::update_slide))
        .route("/presentations/{id}/slides/{slide_id}/delete", web::post().to(slide_handlers::delete_slide))
        .route("/presentations/{id}/slides/{slide_id}/blocks", web::post().to(slide_handlers::add_block))
        .route("/presentations/{id}/slides/{slide_id}/blocks/{index}", web::post().to(slide_handlers::update_block))
        .route("/presentations/{id}/slides/{slide_id}/blocks/{index}/delete", web::post().to(slide_handlers::delete_block))
        .route("/presentations/{id}/slides/{slide_id}/blocks/{index}/move", web::post().to(slide_handlers::move_block))
        .service(web::scope("/api/v1").configure(api_v1::configure));
}

/// Load a deck for a mutation; an unknown presentation is a 404.
async fn load_deck(gateway: &dyn Gateway, id: Uuid, selected: usize) -> Result<DeckEditor<'_>, AppError> {
    DeckEditor::load(gateway, id, selected)
        .await?
        .ok_or(AppError::NotFound)
}

/// The "Presentation not found" page. Shown instead of an editor or a
/// present view whenever the id resolves to nothing.
fn presentation_missing(session: &Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session);
    render_with_status(
        actix_web::http::StatusCode::NOT_FOUND,
        PresentationMissingTemplate { ctx },
    )
}

/// Turn a failed edit into a flash message. The page redirects back to the
/// editor either way; only a vanished slide escalates to a 404.
fn report_edit_error(session: &Session, err: EditError) -> Result<(), AppError> {
    match err {
        EditError::Gateway(_) => flash(session, SAVE_FAILED),
        EditError::Slide(e) => flash(session, &format!("Could not edit block: {e}")),
        EditError::SlideNotFound => return Err(AppError::NotFound),
    }
    Ok(())
}
