use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::gateway::Gateway;
use crate::models::{
    AddBlockForm, BlockForm, BlockKind, BlockPatch, Direction, MoveBlockForm, SlideForm,
};
use crate::session::{flash, verify_csrf};

use super::presentation_handlers::SlideQuery;
use super::{CsrfOnly, load_deck, paths, report_edit_error, see_other};

/// Block focus carried through block forms so it survives the redirect.
#[derive(Deserialize)]
pub struct FocusQuery {
    pub editing: Option<usize>,
}

pub async fn add_slide(
    gateway: web::Data<dyn Gateway>,
    session: Session,
    path: web::Path<Uuid>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    verify_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let mut deck = load_deck(gateway.get_ref(), id, 0).await?;

    if deck.add_slide().await.is_err() {
        flash(&session, "Could not add slide. Please try again.");
    }
    Ok(see_other(&paths::editor(id, deck.navigator().current_index())))
}

/// Delete any slide from the sidebar. The selection stays where it was
/// unless it now points past the end.
pub async fn delete_slide(
    gateway: web::Data<dyn Gateway>,
    session: Session,
    path: web::Path<(Uuid, Uuid)>,
    query: web::Query<SlideQuery>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    verify_csrf(&session, &form.csrf_token)?;
    let (id, slide_id) = path.into_inner();
    let mut deck = load_deck(gateway.get_ref(), id, query.slide).await?;
    if deck.position_of(slide_id).is_none() {
        return Err(AppError::NotFound);
    }

    match deck.delete_slide(slide_id).await {
        Ok(()) => flash(&session, "Slide deleted."),
        Err(e) => report_edit_error(&session, e)?,
    }
    Ok(see_other(&paths::editor(id, deck.navigator().current_index())))
}

/// Slide title and presenter notes.
pub async fn update_slide(
    gateway: web::Data<dyn Gateway>,
    session: Session,
    path: web::Path<(Uuid, Uuid)>,
    form: web::Form<SlideForm>,
) -> Result<HttpResponse, AppError> {
    verify_csrf(&session, &form.csrf_token)?;
    let (id, slide_id) = path.into_inner();
    let mut deck = load_deck(gateway.get_ref(), id, 0).await?;

    let result = deck
        .slide_editor(slide_id)?
        .update_details(form.title.trim(), &form.notes)
        .await;
    if let Err(e) = result {
        report_edit_error(&session, e)?;
    }
    Ok(see_other(&paths::editor(id, deck.navigator().current_index())))
}

pub async fn add_block(
    gateway: web::Data<dyn Gateway>,
    session: Session,
    path: web::Path<(Uuid, Uuid)>,
    form: web::Form<AddBlockForm>,
) -> Result<HttpResponse, AppError> {
    verify_csrf(&session, &form.csrf_token)?;
    let (id, slide_id) = path.into_inner();
    let mut deck = load_deck(gateway.get_ref(), id, 0).await?;

    let kind: BlockKind = match form.kind.parse() {
        Ok(kind) => kind,
        Err(e) => {
            log::warn!("Rejected block for slide {}: {}", slide_id, e);
            flash(&session, &format!("Cannot add block: {e}."));
            let position = deck.position_of(slide_id).ok_or(AppError::NotFound)?;
            return Ok(see_other(&paths::editor(id, position)));
        }
    };

    let mut editor = deck.slide_editor(slide_id)?;
    let focus = match editor.add_block(kind).await {
        Ok(_) => Some(editor.slide().block_count() - 1),
        Err(e) => {
            report_edit_error(&session, e)?;
            None
        }
    };
    let position = deck.navigator().current_index();
    Ok(see_other(&paths::editor_with_focus(id, position, focus)))
}

/// Save a block's value (and heading level) and leave edit mode.
pub async fn update_block(
    gateway: web::Data<dyn Gateway>,
    session: Session,
    path: web::Path<(Uuid, Uuid, usize)>,
    form: web::Form<BlockForm>,
) -> Result<HttpResponse, AppError> {
    verify_csrf(&session, &form.csrf_token)?;
    let (id, slide_id, index) = path.into_inner();
    let mut deck = load_deck(gateway.get_ref(), id, 0).await?;

    let patch = BlockPatch {
        value: Some(form.value.clone()),
        level: form.level.as_deref().and_then(|l| l.trim().parse().ok()),
    };
    let result = deck.slide_editor(slide_id)?.update_block(index, &patch).await;
    let position = deck.navigator().current_index();
    if let Err(e) = result {
        report_edit_error(&session, e)?;
        return Ok(see_other(&paths::editor_editing(id, position, index)));
    }
    Ok(see_other(&paths::editor(id, position)))
}

pub async fn delete_block(
    gateway: web::Data<dyn Gateway>,
    session: Session,
    path: web::Path<(Uuid, Uuid, usize)>,
    query: web::Query<FocusQuery>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    verify_csrf(&session, &form.csrf_token)?;
    let (id, slide_id, index) = path.into_inner();
    let mut deck = load_deck(gateway.get_ref(), id, 0).await?;

    let mut editor = deck.slide_editor(slide_id)?.with_focus(query.editing);
    if let Err(e) = editor.remove_block(index).await {
        report_edit_error(&session, e)?;
    }
    let focus = editor.focus().index();
    let position = deck.navigator().current_index();
    Ok(see_other(&paths::editor_with_focus(id, position, focus)))
}

pub async fn move_block(
    gateway: web::Data<dyn Gateway>,
    session: Session,
    path: web::Path<(Uuid, Uuid, usize)>,
    query: web::Query<FocusQuery>,
    form: web::Form<MoveBlockForm>,
) -> Result<HttpResponse, AppError> {
    verify_csrf(&session, &form.csrf_token)?;
    let (id, slide_id, index) = path.into_inner();
    let direction: Direction = form
        .direction
        .parse()
        .map_err(|_| AppError::BadRequest(format!("unknown direction '{}'", form.direction)))?;
    let mut deck = load_deck(gateway.get_ref(), id, 0).await?;

    let mut editor = deck.slide_editor(slide_id)?.with_focus(query.editing);
    if let Err(e) = editor.move_block(index, direction).await {
        report_edit_error(&session, e)?;
    }
    let focus = editor.focus().index();
    let position = deck.navigator().current_index();
    Ok(see_other(&paths::editor_with_focus(id, position, focus)))
}
