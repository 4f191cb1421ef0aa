use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::block::ContentBlock;

/// Layout tag given to new slides. Stored, not interpreted.
pub const DEFAULT_LAYOUT: &str = "title-content";

/// One slide: an ordered list of content blocks plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Slide {
    pub id: Uuid,
    pub presentation_id: Uuid,
    pub order_index: i32,
    pub title: String,
    #[sqlx(json)]
    pub content: Vec<ContentBlock>,
    pub layout: String,
    pub background_color: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Slide {
    /// Apply an acknowledged patch to the local copy.
    pub fn apply(&mut self, patch: &SlidePatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(layout) = &patch.layout {
            self.layout = layout.clone();
        }
        if let Some(notes) = &patch.notes {
            self.notes = Some(notes.clone());
        }
        if let Some(order_index) = patch.order_index {
            self.order_index = order_index;
        }
        self.updated_at = patch.updated_at;
    }
}

/// Insert request for a slide; the gateway assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSlide {
    pub presentation_id: Uuid,
    pub order_index: i32,
    pub title: String,
    pub content: Vec<ContentBlock>,
    pub layout: String,
}

impl NewSlide {
    /// The slide appended after `existing` slides: "Slide N", empty content.
    pub fn next_for(presentation_id: Uuid, existing: usize) -> Self {
        Self {
            presentation_id,
            order_index: existing as i32,
            title: format!("Slide {}", existing + 1),
            content: Vec::new(),
            layout: DEFAULT_LAYOUT.to_string(),
        }
    }
}

/// Partial slide update. Content is always sent whole; blocks have no
/// identity of their own in storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidePatch {
    pub title: Option<String>,
    pub content: Option<Vec<ContentBlock>>,
    pub layout: Option<String>,
    pub notes: Option<String>,
    pub order_index: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl SlidePatch {
    /// Empty patch stamped with the current time.
    pub fn now() -> Self {
        Self {
            title: None,
            content: None,
            layout: None,
            notes: None,
            order_index: None,
            updated_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: Vec<ContentBlock>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn order_index(mut self, order_index: i32) -> Self {
        self.order_index = Some(order_index);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.layout.is_none()
            && self.notes.is_none()
            && self.order_index.is_none()
    }
}

/// Slide title and presenter notes, submitted together from the editor.
#[derive(Debug, Clone, Deserialize)]
pub struct SlideForm {
    pub title: String,
    #[serde(default)]
    pub notes: String,
    pub csrf_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddBlockForm {
    pub kind: String,
    pub csrf_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockForm {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub level: Option<String>,
    pub csrf_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveBlockForm {
    pub direction: String,
    pub csrf_token: String,
}
