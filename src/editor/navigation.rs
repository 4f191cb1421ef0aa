use crate::models::Slide;

/// Which slide of a deck is selected in the editor.
///
/// Always a valid position when the deck has slides, 0 when it has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckNavigator {
    current: usize,
    len: usize,
}

impl DeckNavigator {
    pub fn new(len: usize, requested: usize) -> Self {
        Self {
            current: requested.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current<'s>(&self, slides: &'s [Slide]) -> Option<&'s Slide> {
        slides.get(self.current)
    }

    pub fn select(&mut self, index: usize) {
        self.current = index.min(self.len.saturating_sub(1));
    }

    /// A slide was appended: select it.
    pub fn after_add(&mut self, new_len: usize) {
        self.len = new_len;
        self.current = new_len.saturating_sub(1);
    }

    /// A slide was removed: keep the selection inside the shorter list.
    pub fn after_delete(&mut self, new_len: usize) {
        self.len = new_len;
        if self.current >= new_len {
            self.current = new_len.saturating_sub(1);
        }
    }

    pub fn can_present(&self) -> bool {
        self.len > 0
    }
}

/// The block currently open for editing, if any. At most one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockFocus(Option<usize>);

impl BlockFocus {
    pub fn none() -> Self {
        Self(None)
    }

    /// Focus `index` if it names a block of a `len`-block slide.
    pub fn on(index: Option<usize>, len: usize) -> Self {
        Self(index.filter(|&i| i < len))
    }

    pub fn index(&self) -> Option<usize> {
        self.0
    }

    pub fn is(&self, index: usize) -> bool {
        self.0 == Some(index)
    }

    /// The block at `removed` is gone and `new_len` remain. The focus follows
    /// its block, and clears if that block was the one removed.
    pub fn after_removal(&mut self, removed: usize, new_len: usize) {
        self.0 = match self.0 {
            Some(i) if i == removed => None,
            Some(i) if i > removed => Some(i - 1),
            other => other,
        }
        .filter(|&i| i < new_len);
    }

    /// Blocks at `a` and `b` swapped places.
    pub fn after_swap(&mut self, a: usize, b: usize) {
        self.0 = self.0.map(|i| if i == a { b } else if i == b { a } else { i });
    }
}
