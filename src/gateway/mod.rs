//! Persistence gateway: the remote table store behind the editor.
//!
//! Every call may fail; callers log the failure and abandon the mutation.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{NewSlide, Presentation, PresentationPatch, Slide, SlidePatch};

pub use memory::MemoryGateway;
pub use postgres::PgGateway;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("record not found")]
    NotFound,
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[async_trait]
pub trait Gateway: Send + Sync {
    /// Insert a presentation; id and timestamps come from the store.
    async fn create_presentation(&self, title: &str, theme: &str) -> GatewayResult<Presentation>;

    /// All presentations, most recently updated first.
    async fn list_presentations(&self) -> GatewayResult<Vec<Presentation>>;

    async fn get_presentation(&self, id: Uuid) -> GatewayResult<Option<Presentation>>;

    async fn update_presentation(&self, id: Uuid, patch: &PresentationPatch) -> GatewayResult<()>;

    /// Slides of a presentation ordered by `order_index`.
    async fn list_slides(&self, presentation_id: Uuid) -> GatewayResult<Vec<Slide>>;

    async fn create_slide(&self, new: &NewSlide) -> GatewayResult<Slide>;

    async fn update_slide(&self, id: Uuid, patch: &SlidePatch) -> GatewayResult<()>;

    async fn delete_slide(&self, id: Uuid) -> GatewayResult<()>;
}
