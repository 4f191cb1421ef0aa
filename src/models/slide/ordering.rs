use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::types::Slide;
use crate::models::block::{BlockPatch, ContentBlock};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlideError {
    #[error("block index {index} out of range (slide has {len} blocks)")]
    BlockOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(format!("unknown direction '{other}'")),
        }
    }
}

impl Slide {
    pub fn block_count(&self) -> usize {
        self.content.len()
    }

    pub fn append_block(&mut self, block: ContentBlock) {
        self.content.push(block);
    }

    pub fn update_block(&mut self, index: usize, patch: &BlockPatch) -> Result<(), SlideError> {
        let len = self.content.len();
        let block = self
            .content
            .get_mut(index)
            .ok_or(SlideError::BlockOutOfRange { index, len })?;
        block.apply(patch);
        Ok(())
    }

    /// Remove the block at `index`; later blocks shift left by one.
    pub fn remove_block(&mut self, index: usize) -> Result<ContentBlock, SlideError> {
        if index >= self.content.len() {
            return Err(SlideError::BlockOutOfRange {
                index,
                len: self.content.len(),
            });
        }
        Ok(self.content.remove(index))
    }

    /// Swap the block at `index` with its neighbour. Returns false, leaving the
    /// content untouched, when the move would leave the list.
    pub fn move_block(&mut self, index: usize, direction: Direction) -> bool {
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1),
        };
        match target {
            Some(target) if index < self.content.len() && target < self.content.len() => {
                self.content.swap(index, target);
                true
            }
            _ => false,
        }
    }
}

/// Renumber `order_index` to match array position. Returns the slides whose
/// index changed, with their new value.
pub fn resequence(slides: &mut [Slide]) -> Vec<(Uuid, i32)> {
    let mut changed = Vec::new();
    for (position, slide) in slides.iter_mut().enumerate() {
        let position = position as i32;
        if slide.order_index != position {
            slide.order_index = position;
            changed.push((slide.id, position));
        }
    }
    changed
}
