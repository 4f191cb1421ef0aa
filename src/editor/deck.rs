use uuid::Uuid;

use crate::gateway::{Gateway, GatewayResult};
use crate::models::presentation::DEFAULT_TITLE;
use crate::models::slide::resequence;
use crate::models::{NewSlide, Presentation, PresentationPatch, Slide, SlidePatch, Theme};

use super::{DeckNavigator, EditError, EditOutcome, SlideEditor};

/// Create an "Untitled Presentation" with the default theme.
pub async fn create_presentation(gateway: &dyn Gateway) -> GatewayResult<Presentation> {
    match gateway
        .create_presentation(DEFAULT_TITLE, Theme::default().as_str())
        .await
    {
        Ok(presentation) => {
            log::info!("Created presentation {}", presentation.id);
            Ok(presentation)
        }
        Err(e) => {
            log::error!("Error creating presentation: {}", e);
            Err(e)
        }
    }
}

/// A presentation with its slides, loaded for one round of editing.
pub struct DeckEditor<'a> {
    gateway: &'a dyn Gateway,
    presentation: Presentation,
    slides: Vec<Slide>,
    nav: DeckNavigator,
}

impl<'a> DeckEditor<'a> {
    /// Load a presentation and its slides. `Ok(None)` when the presentation
    /// does not exist.
    pub async fn load(
        gateway: &'a dyn Gateway,
        presentation_id: Uuid,
        selected: usize,
    ) -> GatewayResult<Option<DeckEditor<'a>>> {
        let Some(presentation) = gateway.get_presentation(presentation_id).await? else {
            return Ok(None);
        };
        let slides = gateway.list_slides(presentation_id).await?;
        let nav = DeckNavigator::new(slides.len(), selected);
        Ok(Some(Self {
            gateway,
            presentation,
            slides,
            nav,
        }))
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn navigator(&self) -> DeckNavigator {
        self.nav
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.nav.current(&self.slides)
    }

    pub fn position_of(&self, slide_id: Uuid) -> Option<usize> {
        self.slides.iter().position(|s| s.id == slide_id)
    }

    /// Block editor for one slide of this deck; selects that slide.
    pub fn slide_editor(&mut self, slide_id: Uuid) -> Result<SlideEditor<'_>, EditError> {
        let position = self.position_of(slide_id).ok_or(EditError::SlideNotFound)?;
        self.nav.select(position);
        Ok(SlideEditor::new(self.gateway, &mut self.slides[position]))
    }

    pub async fn update_presentation(&mut self, patch: PresentationPatch) -> Result<EditOutcome, EditError> {
        if patch.is_empty() {
            return Ok(EditOutcome::Unchanged);
        }
        match self.gateway.update_presentation(self.presentation.id, &patch).await {
            Ok(()) => {
                self.presentation.apply(&patch);
                Ok(EditOutcome::Applied)
            }
            Err(e) => {
                log::error!("Error updating presentation {}: {}", self.presentation.id, e);
                Err(e.into())
            }
        }
    }

    /// Append "Slide N" and select it.
    pub async fn add_slide(&mut self) -> Result<&Slide, EditError> {
        let new = NewSlide::next_for(self.presentation.id, self.slides.len());
        let slide = self.gateway.create_slide(&new).await.map_err(|e| {
            log::error!("Error adding slide to {}: {}", self.presentation.id, e);
            EditError::from(e)
        })?;
        self.slides.push(slide);
        self.nav.after_add(self.slides.len());
        Ok(&self.slides[self.slides.len() - 1])
    }

    /// Delete a slide, keep the selection in range, then renumber the
    /// remaining slides so `order_index` stays contiguous.
    pub async fn delete_slide(&mut self, slide_id: Uuid) -> Result<(), EditError> {
        let position = self.position_of(slide_id).ok_or(EditError::SlideNotFound)?;
        if let Err(e) = self.gateway.delete_slide(slide_id).await {
            log::error!("Error deleting slide {}: {}", slide_id, e);
            return Err(e.into());
        }
        self.slides.remove(position);
        self.nav.after_delete(self.slides.len());
        self.resequence().await;
        Ok(())
    }

    async fn resequence(&mut self) {
        let mut draft = self.slides.clone();
        for (id, order_index) in resequence(&mut draft) {
            let patch = SlidePatch::now().order_index(order_index);
            match self.gateway.update_slide(id, &patch).await {
                Ok(()) => {
                    if let Some(slide) = self.slides.iter_mut().find(|s| s.id == id) {
                        slide.apply(&patch);
                    }
                }
                Err(e) => log::warn!("Could not renumber slide {}: {}", id, e),
            }
        }
    }

    pub fn into_parts(self) -> (Presentation, Vec<Slide>, DeckNavigator) {
        (self.presentation, self.slides, self.nav)
    }
}
