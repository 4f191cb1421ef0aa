use crate::gateway::Gateway;
use crate::models::{BlockKind, BlockPatch, ContentBlock, Direction, Slide, SlidePatch};

use super::{BlockFocus, EditError, EditOutcome};

/// Block editor for one slide.
pub struct SlideEditor<'a> {
    gateway: &'a dyn Gateway,
    slide: &'a mut Slide,
    focus: BlockFocus,
}

impl<'a> SlideEditor<'a> {
    pub fn new(gateway: &'a dyn Gateway, slide: &'a mut Slide) -> Self {
        Self {
            gateway,
            slide,
            focus: BlockFocus::none(),
        }
    }

    pub fn with_focus(mut self, index: Option<usize>) -> Self {
        self.focus = BlockFocus::on(index, self.slide.block_count());
        self
    }

    pub fn slide(&self) -> &Slide {
        self.slide
    }

    pub fn focus(&self) -> BlockFocus {
        self.focus
    }

    /// Append a block of `kind` with its default value.
    pub async fn add_block(&mut self, kind: BlockKind) -> Result<EditOutcome, EditError> {
        self.append(ContentBlock::new(kind)).await
    }

    pub async fn append(&mut self, block: ContentBlock) -> Result<EditOutcome, EditError> {
        let mut draft = self.slide.clone();
        draft.append_block(block);
        self.save_content(draft.content).await
    }

    pub async fn update_block(&mut self, index: usize, patch: &BlockPatch) -> Result<EditOutcome, EditError> {
        let mut draft = self.slide.clone();
        draft.update_block(index, patch)?;
        self.save_content(draft.content).await
    }

    pub async fn remove_block(&mut self, index: usize) -> Result<EditOutcome, EditError> {
        let mut draft = self.slide.clone();
        draft.remove_block(index)?;
        let new_len = draft.block_count();
        let outcome = self.save_content(draft.content).await?;
        self.focus.after_removal(index, new_len);
        Ok(outcome)
    }

    pub async fn move_block(&mut self, index: usize, direction: Direction) -> Result<EditOutcome, EditError> {
        let mut draft = self.slide.clone();
        if !draft.move_block(index, direction) {
            return Ok(EditOutcome::Unchanged);
        }
        let outcome = self.save_content(draft.content).await?;
        let other = match direction {
            Direction::Up => index - 1,
            Direction::Down => index + 1,
        };
        self.focus.after_swap(index, other);
        Ok(outcome)
    }

    /// Title and notes go out as one update so they land together or not at all.
    pub async fn update_details(&mut self, title: &str, notes: &str) -> Result<EditOutcome, EditError> {
        let mut patch = SlidePatch::now();
        if title != self.slide.title {
            patch = patch.title(title);
        }
        if notes != self.slide.notes.as_deref().unwrap_or("") {
            patch = patch.notes(notes);
        }
        self.persist(patch).await
    }

    async fn save_content(&mut self, content: Vec<ContentBlock>) -> Result<EditOutcome, EditError> {
        self.persist(SlidePatch::now().content(content)).await
    }

    async fn persist(&mut self, patch: SlidePatch) -> Result<EditOutcome, EditError> {
        if patch.is_empty() {
            return Ok(EditOutcome::Unchanged);
        }
        match self.gateway.update_slide(self.slide.id, &patch).await {
            Ok(()) => {
                self.slide.apply(&patch);
                Ok(EditOutcome::Applied)
            }
            Err(e) => {
                log::error!("Error updating slide {}: {}", self.slide.id, e);
                Err(e.into())
            }
        }
    }
}
