use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::editor::{BlockFocus, DeckEditor, create_presentation};
use crate::errors::{AppError, render};
use crate::gateway::Gateway;
use crate::models::{PresentationForm, PresentationPatch, Theme, ThemeForm};
use crate::session::{flash, verify_csrf};
use crate::templates_structs::{
    EditorTemplate, PageContext, PresentationCard, PresentationListTemplate,
};

use super::{CsrfOnly, SAVE_FAILED, load_deck, paths, presentation_missing, see_other};

#[derive(Deserialize)]
pub struct EditorQuery {
    #[serde(default)]
    pub slide: usize,
    pub editing: Option<usize>,
    #[serde(default)]
    pub settings: bool,
}

/// Selected slide, carried through presentation-level forms.
#[derive(Deserialize)]
pub struct SlideQuery {
    #[serde(default)]
    pub slide: usize,
}

pub async fn list(
    gateway: web::Data<dyn Gateway>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let mut ctx = PageContext::build(&session);
    let presentations = match gateway.list_presentations().await {
        Ok(list) => list.iter().map(PresentationCard::from).collect(),
        Err(e) => {
            log::error!("Error loading presentations: {}", e);
            ctx.flash = Some("Could not load presentations.".to_string());
            vec![]
        }
    };

    render(PresentationListTemplate { ctx, presentations })
}

pub async fn create(
    gateway: web::Data<dyn Gateway>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    verify_csrf(&session, &form.csrf_token)?;

    match create_presentation(gateway.get_ref()).await {
        Ok(presentation) => Ok(see_other(&paths::editor(presentation.id, 0))),
        Err(_) => {
            flash(&session, "Could not create presentation. Please try again.");
            Ok(see_other(paths::PRESENTATIONS))
        }
    }
}

pub async fn editor(
    gateway: web::Data<dyn Gateway>,
    session: Session,
    path: web::Path<Uuid>,
    query: web::Query<EditorQuery>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let Some(deck) = DeckEditor::load(gateway.get_ref(), id, query.slide).await? else {
        return presentation_missing(&session);
    };

    let block_count = deck.current_slide().map_or(0, |s| s.block_count());
    let focus = BlockFocus::on(query.editing, block_count);
    let ctx = PageContext::build(&session);
    render(EditorTemplate::new(ctx, &deck, focus, query.settings))
}

/// Title and description from the settings panel.
pub async fn update(
    gateway: web::Data<dyn Gateway>,
    session: Session,
    path: web::Path<Uuid>,
    query: web::Query<SlideQuery>,
    form: web::Form<PresentationForm>,
) -> Result<HttpResponse, AppError> {
    verify_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let mut deck = load_deck(gateway.get_ref(), id, query.slide).await?;
    let slide = deck.navigator().current_index();

    let title = form.title.trim();
    let current = deck.presentation();
    let mut patch = PresentationPatch::now();
    if title != current.title {
        patch = patch.title(title);
    }
    let description = form.description.as_deref().unwrap_or("").trim();
    if description != current.description.as_deref().unwrap_or("") {
        patch = patch.description(description);
    }

    if deck.update_presentation(patch).await.is_err() {
        flash(&session, SAVE_FAILED);
        return Ok(see_other(&paths::editor_settings(id, slide)));
    }
    Ok(see_other(&paths::editor(id, slide)))
}

pub async fn update_theme(
    gateway: web::Data<dyn Gateway>,
    session: Session,
    path: web::Path<Uuid>,
    query: web::Query<SlideQuery>,
    form: web::Form<ThemeForm>,
) -> Result<HttpResponse, AppError> {
    verify_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let mut deck = load_deck(gateway.get_ref(), id, query.slide).await?;
    let slide = deck.navigator().current_index();

    let Some(theme) = Theme::ALL.into_iter().find(|t| t.as_str() == form.theme) else {
        flash(&session, &format!("Unknown theme '{}'.", form.theme));
        return Ok(see_other(&paths::editor_settings(id, slide)));
    };
    if deck.presentation().theme == theme.as_str() {
        return Ok(see_other(&paths::editor_settings(id, slide)));
    }

    if deck.update_presentation(PresentationPatch::now().theme(theme)).await.is_err() {
        flash(&session, SAVE_FAILED);
    }
    Ok(see_other(&paths::editor_settings(id, slide)))
}
