use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::editor::DeckEditor;
use crate::errors::{AppError, render};
use crate::gateway::Gateway;
use crate::present::{PresentCommand, PresentSession, Step};
use crate::render::{self, RenderMode};
use crate::session::flash;
use crate::templates_structs::{APP_NAME, PresentTemplate};

use super::{paths, presentation_missing, see_other};

#[derive(Deserialize)]
pub struct PresentQuery {
    #[serde(default)]
    pub slide: usize,
    #[serde(default)]
    pub notes: bool,
    /// A key pressed on the previous page; applied, then redirected away.
    pub key: Option<String>,
}

pub async fn present(
    gateway: web::Data<dyn Gateway>,
    session: Session,
    path: web::Path<Uuid>,
    query: web::Query<PresentQuery>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let Some(deck) = DeckEditor::load(gateway.get_ref(), id, query.slide).await? else {
        return presentation_missing(&session);
    };

    let Some(mut state) = PresentSession::restore(deck.slides().len(), query.slide, query.notes) else {
        flash(&session, "Add a slide before presenting.");
        return Ok(see_other(&paths::editor(id, 0)));
    };

    if let Some(key) = query.key.as_deref() {
        if let Some(command) = PresentCommand::from_key(key) {
            match state.apply(command) {
                Step::Stay(next) => state = next,
                Step::Exited => return Ok(see_other(&paths::editor(id, state.index()))),
            }
        }
        return Ok(see_other(&paths::present(id, state.index(), state.show_notes())));
    }

    let presentation = deck.presentation();
    let slide = deck.slides().get(state.index()).ok_or(AppError::NotFound)?;
    let (index, notes) = (state.index(), state.show_notes());
    let tmpl = PresentTemplate {
        app_name: APP_NAME.to_string(),
        presentation_title: presentation.title.clone(),
        slide: render::render(slide, &presentation.theme, RenderMode::Present),
        counter: state.counter(),
        show_notes: notes,
        notes: render::notes_text(slide).to_string(),
        is_first: state.is_first(),
        is_last: state.is_last(),
        prev_href: paths::present_key(id, index, notes, "ArrowLeft"),
        next_href: paths::present_key(id, index, notes, "ArrowRight"),
        notes_href: paths::present_key(id, index, notes, "n"),
        exit_href: paths::present_key(id, index, notes, "Escape"),
        key_href: paths::present(id, index, notes),
    };
    render(tmpl)
}
