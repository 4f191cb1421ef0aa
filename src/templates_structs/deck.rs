use askama::Template;
use uuid::Uuid;

use crate::editor::{BlockFocus, DeckEditor};
use crate::handlers::paths;
use crate::models::{BlockKind, Presentation, Slide, Theme};
use crate::render::{self, RenderMode, RenderedBlock, RenderedSlide};

use super::PageContext;

#[derive(Template)]
#[template(path = "presentations/list.html")]
pub struct PresentationListTemplate {
    pub ctx: PageContext,
    pub presentations: Vec<PresentationCard>,
}

pub struct PresentationCard {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub updated_label: String,
}

impl From<&Presentation> for PresentationCard {
    fn from(p: &Presentation) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            description: p.description.clone().filter(|d| !d.is_empty()),
            updated_label: p.updated_label(),
        }
    }
}

#[derive(Template)]
#[template(path = "presentations/not_found.html")]
pub struct PresentationMissingTemplate {
    pub ctx: PageContext,
}

/// Sidebar miniature.
pub struct SlideThumb {
    pub position: usize,
    pub preview: RenderedSlide,
    pub is_active: bool,
    pub href: String,
    /// Keeps the current selection through the delete redirect.
    pub delete_action: String,
}

pub struct ThemeOption {
    pub tag: &'static str,
    pub label: &'static str,
    pub is_selected: bool,
}

pub struct BlockRow {
    pub index: usize,
    pub kind: BlockKind,
    pub value: String,
    /// Heading level; 0 for other kinds.
    pub level: u8,
    pub is_first: bool,
    pub is_last: bool,
    pub is_editing: bool,
    pub edit_href: String,
    /// Form action prefix: `/presentations/{id}/slides/{slide}/blocks/{index}`.
    pub action: String,
    /// Query string carrying the current block focus through block forms.
    pub focus_query: String,
}

pub struct CurrentSlide {
    pub id: Uuid,
    pub position: usize,
    pub title: String,
    pub notes: String,
    pub action: String,
    pub blocks: Vec<BlockRow>,
}

impl CurrentSlide {
    fn build(presentation_id: Uuid, position: usize, slide: &Slide, focus: BlockFocus) -> Self {
        let action = paths::slide_action(presentation_id, slide.id);
        let focus_query = match focus.index() {
            Some(index) => format!("?editing={index}"),
            None => String::new(),
        };
        let last = slide.content.len().saturating_sub(1);
        let blocks = slide
            .content
            .iter()
            .enumerate()
            .map(|(index, block)| BlockRow {
                index,
                kind: block.kind(),
                value: block.value().to_string(),
                level: block.level().unwrap_or(0),
                is_first: index == 0,
                is_last: index == last,
                is_editing: focus.is(index),
                edit_href: paths::editor_editing(presentation_id, position, index),
                action: format!("{action}/blocks/{index}"),
                focus_query: focus_query.clone(),
            })
            .collect();

        Self {
            id: slide.id,
            position,
            title: slide.title.clone(),
            notes: slide.notes.clone().unwrap_or_default(),
            action,
            blocks,
        }
    }
}

#[derive(Template)]
#[template(path = "presentations/editor.html")]
pub struct EditorTemplate {
    pub ctx: PageContext,
    pub presentation_id: Uuid,
    pub title: String,
    pub description: String,
    pub theme_options: Vec<ThemeOption>,
    pub show_settings: bool,
    pub slide_count: usize,
    pub can_present: bool,
    pub thumbs: Vec<SlideThumb>,
    pub current: Option<CurrentSlide>,
    pub block_kinds: [BlockKind; 5],
    pub current_position: usize,
    pub settings_href: String,
    pub close_settings_href: String,
    pub present_href: String,
}

impl EditorTemplate {
    pub fn new(ctx: PageContext, deck: &DeckEditor<'_>, focus: BlockFocus, show_settings: bool) -> Self {
        let presentation = deck.presentation();
        let id = presentation.id;
        let nav = deck.navigator();
        let current_position = nav.current_index();

        let thumbs = deck
            .slides()
            .iter()
            .enumerate()
            .map(|(position, slide)| SlideThumb {
                position,
                preview: render::render(slide, &presentation.theme, RenderMode::Preview),
                is_active: position == current_position,
                href: paths::editor(id, position),
                delete_action: paths::delete_slide(id, slide.id, current_position),
            })
            .collect();

        let current = deck
            .current_slide()
            .map(|slide| CurrentSlide::build(id, current_position, slide, focus));

        let selected = presentation.theme();
        let theme_options = Theme::ALL
            .iter()
            .map(|theme| ThemeOption {
                tag: theme.as_str(),
                label: theme.label(),
                is_selected: *theme == selected,
            })
            .collect();

        Self {
            ctx,
            presentation_id: id,
            title: presentation.title.clone(),
            description: presentation.description.clone().unwrap_or_default(),
            theme_options,
            show_settings,
            slide_count: nav.len(),
            can_present: nav.can_present(),
            thumbs,
            current,
            block_kinds: BlockKind::ALL,
            current_position,
            settings_href: paths::editor_settings(id, current_position),
            close_settings_href: paths::editor(id, current_position),
            present_href: paths::present(id, 0, false),
        }
    }
}

