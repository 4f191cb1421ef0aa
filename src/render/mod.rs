//! Slide rendering: one pure mapping from a slide and a theme tag to a small
//! view tree, used for sidebar previews and for present mode.

pub mod theme;

use crate::models::{ContentBlock, Slide};

pub use theme::ThemeStyle;

/// Blocks shown in a miniature preview.
pub const PREVIEW_BLOCK_LIMIT: usize = 3;
/// Characters kept per preview line before an ellipsis.
pub const PREVIEW_LINE_CHARS: usize = 60;
pub const NO_NOTES: &str = "No notes for this slide";

const BULLET_GLYPH: &str = "\u{2022} ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Preview,
    Present,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    /// Plain single line, preview only.
    Line { text: String },
    SubHeading { text: String, level: u8 },
    Paragraph { text: String },
    Bullet { text: String },
    Code { source: String },
    Image { src: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSlide {
    pub mode: RenderMode,
    pub title: String,
    pub style: &'static ThemeStyle,
    pub blocks: Vec<RenderedBlock>,
    /// "Slide N" under previews.
    pub caption: String,
}

impl RenderedSlide {
    pub fn surface_css(&self) -> String {
        self.style.css(self.mode)
    }
}

pub fn render(slide: &Slide, theme_tag: &str, mode: RenderMode) -> RenderedSlide {
    let blocks = match mode {
        RenderMode::Preview => slide
            .content
            .iter()
            .take(PREVIEW_BLOCK_LIMIT)
            .map(preview_line)
            .collect(),
        RenderMode::Present => slide.content.iter().filter_map(present_block).collect(),
    };

    RenderedSlide {
        mode,
        title: slide.title.clone(),
        style: ThemeStyle::for_tag(theme_tag),
        blocks,
        caption: format!("Slide {}", slide.order_index + 1),
    }
}

/// Presenter notes, or the placeholder when there are none.
pub fn notes_text(slide: &Slide) -> &str {
    match slide.notes.as_deref() {
        Some(notes) if !notes.is_empty() => notes,
        _ => NO_NOTES,
    }
}

fn preview_line(block: &ContentBlock) -> RenderedBlock {
    let first_line = block.value().lines().next().unwrap_or("");
    let mut text = match block {
        ContentBlock::Bullet { .. } => String::from(BULLET_GLYPH),
        _ => String::new(),
    };
    text.push_str(&truncate(first_line, PREVIEW_LINE_CHARS));
    RenderedBlock::Line { text }
}

fn present_block(block: &ContentBlock) -> Option<RenderedBlock> {
    let rendered = match block {
        ContentBlock::Heading { value, level } => RenderedBlock::SubHeading {
            text: value.clone(),
            level: level.unwrap_or(crate::models::block::DEFAULT_HEADING_LEVEL),
        },
        ContentBlock::Text { value } => RenderedBlock::Paragraph { text: value.clone() },
        ContentBlock::Bullet { value } => RenderedBlock::Bullet { text: value.clone() },
        ContentBlock::Code { value } => RenderedBlock::Code { source: value.clone() },
        ContentBlock::Image { value } if value.is_empty() => return None,
        ContentBlock::Image { value } => RenderedBlock::Image { src: value.clone() },
    };
    Some(rendered)
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}\u{2026}", &text[..cut]),
        None => text.to_string(),
    }
}
