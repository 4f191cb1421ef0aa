pub mod block;
pub mod presentation;
pub mod slide;

pub use block::{BlockKind, BlockPatch, ContentBlock};
pub use presentation::{Presentation, PresentationForm, PresentationPatch, Theme, ThemeForm};
pub use slide::{
    AddBlockForm, BlockForm, Direction, MoveBlockForm, NewSlide, Slide, SlideError, SlideForm,
    SlidePatch,
};
