use askama::Template;

use crate::render::{RenderedBlock, RenderedSlide};

/// Full-screen slide. Has no base layout and no forms; navigation is plain
/// links plus a key listener that follows `key_href`.
#[derive(Template)]
#[template(path = "presentations/present.html")]
pub struct PresentTemplate {
    pub app_name: String,
    pub presentation_title: String,
    pub slide: RenderedSlide,
    pub counter: String,
    pub show_notes: bool,
    pub notes: String,
    pub is_first: bool,
    pub is_last: bool,
    pub prev_href: String,
    pub next_href: String,
    pub notes_href: String,
    pub exit_href: String,
    /// Present URL for the current state, awaiting a `&key=` suffix.
    pub key_href: String,
}
