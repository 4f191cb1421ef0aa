use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{Gateway, GatewayError, GatewayResult};
use crate::models::{NewSlide, Presentation, PresentationPatch, Slide, SlidePatch};

#[derive(Default)]
struct Tables {
    presentations: HashMap<Uuid, Presentation>,
    slides: HashMap<Uuid, Slide>,
}

/// Process-local gateway. Used when no database is configured and by tests.
///
/// `set_failing(true)` turns every call into `GatewayError::Unavailable`;
/// `set_failing_writes(true)` only the mutating ones.
#[derive(Default)]
pub struct MemoryGateway {
    tables: RwLock<Tables>,
    failing: AtomicBool,
    failing_writes: AtomicBool,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_failing_writes(&self, failing: bool) {
        self.failing_writes.store(failing, Ordering::SeqCst);
    }

    fn read(&self) -> GatewayResult<RwLockReadGuard<'_, Tables>> {
        self.check()?;
        self.tables
            .read()
            .map_err(|_| GatewayError::Unavailable("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> GatewayResult<RwLockWriteGuard<'_, Tables>> {
        self.check()?;
        if self.failing_writes.load(Ordering::SeqCst) {
            return Err(GatewayError::Unavailable("memory gateway rejects writes".to_string()));
        }
        self.tables
            .write()
            .map_err(|_| GatewayError::Unavailable("memory store lock poisoned".to_string()))
    }

    fn check(&self) -> GatewayResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(GatewayError::Unavailable("memory gateway is set to fail".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Gateway for MemoryGateway {
    async fn create_presentation(&self, title: &str, theme: &str) -> GatewayResult<Presentation> {
        let now = Utc::now();
        let presentation = Presentation {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            theme: theme.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.write()?
            .presentations
            .insert(presentation.id, presentation.clone());
        Ok(presentation)
    }

    async fn list_presentations(&self) -> GatewayResult<Vec<Presentation>> {
        let mut all: Vec<Presentation> = self.read()?.presentations.values().cloned().collect();
        all.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(all)
    }

    async fn get_presentation(&self, id: Uuid) -> GatewayResult<Option<Presentation>> {
        Ok(self.read()?.presentations.get(&id).cloned())
    }

    async fn update_presentation(&self, id: Uuid, patch: &PresentationPatch) -> GatewayResult<()> {
        let mut tables = self.write()?;
        let presentation = tables.presentations.get_mut(&id).ok_or(GatewayError::NotFound)?;
        presentation.apply(patch);
        Ok(())
    }

    async fn list_slides(&self, presentation_id: Uuid) -> GatewayResult<Vec<Slide>> {
        let mut slides: Vec<Slide> = self
            .read()?
            .slides
            .values()
            .filter(|s| s.presentation_id == presentation_id)
            .cloned()
            .collect();
        slides.sort_by(|a, b| {
            a.order_index
                .cmp(&b.order_index)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(slides)
    }

    async fn create_slide(&self, new: &NewSlide) -> GatewayResult<Slide> {
        let mut tables = self.write()?;
        if !tables.presentations.contains_key(&new.presentation_id) {
            return Err(GatewayError::NotFound);
        }
        let now = Utc::now();
        let slide = Slide {
            id: Uuid::new_v4(),
            presentation_id: new.presentation_id,
            order_index: new.order_index,
            title: new.title.clone(),
            content: new.content.clone(),
            layout: new.layout.clone(),
            background_color: None,
            notes: None,
            created_at: now,
            updated_at: now,
        };
        tables.slides.insert(slide.id, slide.clone());
        Ok(slide)
    }

    async fn update_slide(&self, id: Uuid, patch: &SlidePatch) -> GatewayResult<()> {
        let mut tables = self.write()?;
        let slide = tables.slides.get_mut(&id).ok_or(GatewayError::NotFound)?;
        slide.apply(patch);
        Ok(())
    }

    async fn delete_slide(&self, id: Uuid) -> GatewayResult<()> {
        self.write()?
            .slides
            .remove(&id)
            .map(|_| ())
            .ok_or(GatewayError::NotFound)
    }
}
