use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Heading level given to headings created from the editor.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// The five kinds of slide content. The set is closed: rendering and editing
/// match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Text,
    Bullet,
    Image,
    Code,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Bullet,
        BlockKind::Code,
        BlockKind::Image,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Text => "text",
            BlockKind::Bullet => "bullet",
            BlockKind::Image => "image",
            BlockKind::Code => "code",
        }
    }

    /// Button label in the editor toolbar.
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Heading => "Heading",
            BlockKind::Text => "Text",
            BlockKind::Bullet => "Bullet",
            BlockKind::Image => "Image",
            BlockKind::Code => "Code",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBlockKind(pub String);

impl fmt::Display for UnknownBlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown block type '{}'", self.0)
    }
}

impl std::error::Error for UnknownBlockKind {}

impl FromStr for BlockKind {
    type Err = UnknownBlockKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heading" => Ok(BlockKind::Heading),
            "text" => Ok(BlockKind::Text),
            "bullet" => Ok(BlockKind::Bullet),
            "image" => Ok(BlockKind::Image),
            "code" => Ok(BlockKind::Code),
            other => Err(UnknownBlockKind(other.to_string())),
        }
    }
}

/// One unit of slide content.
///
/// Stored as `{"type": "...", "value": "...", "level": n}` where `level` only
/// appears on headings. `value` holds the URL for images and raw source for
/// code; it may be empty for every kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Heading {
        #[serde(default)]
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<u8>,
    },
    Text {
        #[serde(default)]
        value: String,
    },
    Bullet {
        #[serde(default)]
        value: String,
    },
    Image {
        #[serde(default)]
        value: String,
    },
    Code {
        #[serde(default)]
        value: String,
    },
}

impl ContentBlock {
    /// Build a block of `kind` with the defaults the editor inserts.
    pub fn new(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Heading => ContentBlock::Heading {
                value: "New Heading".to_string(),
                level: Some(DEFAULT_HEADING_LEVEL),
            },
            BlockKind::Text => ContentBlock::Text { value: String::new() },
            BlockKind::Bullet => ContentBlock::Bullet {
                value: "New bullet point".to_string(),
            },
            BlockKind::Image => ContentBlock::Image { value: String::new() },
            BlockKind::Code => ContentBlock::Code { value: String::new() },
        }
    }

    /// Build a block of `kind` holding `value`. Headings get the default level.
    pub fn with_value(kind: BlockKind, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            BlockKind::Heading => ContentBlock::Heading {
                value,
                level: Some(DEFAULT_HEADING_LEVEL),
            },
            BlockKind::Text => ContentBlock::Text { value },
            BlockKind::Bullet => ContentBlock::Bullet { value },
            BlockKind::Image => ContentBlock::Image { value },
            BlockKind::Code => ContentBlock::Code { value },
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::Heading { .. } => BlockKind::Heading,
            ContentBlock::Text { .. } => BlockKind::Text,
            ContentBlock::Bullet { .. } => BlockKind::Bullet,
            ContentBlock::Image { .. } => BlockKind::Image,
            ContentBlock::Code { .. } => BlockKind::Code,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ContentBlock::Heading { value, .. }
            | ContentBlock::Text { value }
            | ContentBlock::Bullet { value }
            | ContentBlock::Image { value }
            | ContentBlock::Code { value } => value,
        }
    }

    /// Heading level; `None` for every other kind.
    pub fn level(&self) -> Option<u8> {
        match self {
            ContentBlock::Heading { level, .. } => *level,
            _ => None,
        }
    }

    /// Merge `patch` into this block. The kind never changes; a level on a
    /// non-heading block is dropped.
    pub fn apply(&mut self, patch: &BlockPatch) {
        if let Some(new_value) = &patch.value {
            match self {
                ContentBlock::Heading { value, .. }
                | ContentBlock::Text { value }
                | ContentBlock::Bullet { value }
                | ContentBlock::Image { value }
                | ContentBlock::Code { value } => *value = new_value.clone(),
            }
        }
        if let (Some(new_level), ContentBlock::Heading { level, .. }) = (patch.level, self) {
            *level = Some(new_level);
        }
    }
}

/// Partial update for a block. A block's kind is fixed once created, so there
/// is no kind field here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BlockPatch {
    pub value: Option<String>,
    pub level: Option<u8>,
}

impl BlockPatch {
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            level: None,
        }
    }
}
