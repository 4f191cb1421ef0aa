use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Gateway, GatewayError, GatewayResult};
use crate::models::{presentation, slide, NewSlide, Presentation, PresentationPatch, Slide, SlidePatch};

/// Gateway backed by the `presentations` and `slides` tables.
#[derive(Clone)]
pub struct PgGateway {
    pool: PgPool,
}

impl PgGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn found(matched: bool) -> GatewayResult<()> {
    if matched { Ok(()) } else { Err(GatewayError::NotFound) }
}

#[async_trait]
impl Gateway for PgGateway {
    async fn create_presentation(&self, title: &str, theme: &str) -> GatewayResult<Presentation> {
        Ok(presentation::queries::create(&self.pool, title, theme).await?)
    }

    async fn list_presentations(&self) -> GatewayResult<Vec<Presentation>> {
        Ok(presentation::queries::find_all(&self.pool).await?)
    }

    async fn get_presentation(&self, id: Uuid) -> GatewayResult<Option<Presentation>> {
        Ok(presentation::queries::find_by_id(&self.pool, id).await?)
    }

    async fn update_presentation(&self, id: Uuid, patch: &PresentationPatch) -> GatewayResult<()> {
        found(presentation::queries::update(&self.pool, id, patch).await?)
    }

    async fn list_slides(&self, presentation_id: Uuid) -> GatewayResult<Vec<Slide>> {
        Ok(slide::queries::find_for_presentation(&self.pool, presentation_id).await?)
    }

    async fn create_slide(&self, new: &NewSlide) -> GatewayResult<Slide> {
        Ok(slide::queries::create(&self.pool, new).await?)
    }

    async fn update_slide(&self, id: Uuid, patch: &SlidePatch) -> GatewayResult<()> {
        found(slide::queries::update(&self.pool, id, patch).await?)
    }

    async fn delete_slide(&self, id: Uuid) -> GatewayResult<()> {
        found(slide::queries::delete(&self.pool, id).await?)
    }
}
