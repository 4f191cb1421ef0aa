// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::session::{csrf_token, take_flash};

mod api;
mod deck;
mod present;

pub use self::api::{
    ApiErrorResponse, CreatePresentationRequest, PresentationDetailResponse, UpdateSlideRequest,
};
pub use self::deck::{
    BlockRow, CurrentSlide, EditorTemplate, PresentationCard, PresentationListTemplate,
    PresentationMissingTemplate, SlideThumb, ThemeOption,
};
pub use self::present::PresentTemplate;

pub const APP_NAME: &str = "Decks";

/// Context shared by every page that renders the base layout.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            flash: take_flash(session),
            csrf_token: csrf_token(session),
        }
    }
}
