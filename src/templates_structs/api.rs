use serde::{Deserialize, Serialize};

use crate::models::{ContentBlock, Presentation, Slide};

#[derive(Serialize, Debug, Clone)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl ApiErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// POST /api/v1/presentations body. Both fields fall back to the defaults
/// used by the editor's "New presentation" button.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CreatePresentationRequest {
    pub title: Option<String>,
    pub theme: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct PresentationDetailResponse {
    pub presentation: Presentation,
    pub slides: Vec<Slide>,
}

/// PUT /api/v1/slides/{id} body. Omitted fields are left unchanged;
/// `content` replaces the whole block list.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct UpdateSlideRequest {
    pub title: Option<String>,
    pub content: Option<Vec<ContentBlock>>,
    pub layout: Option<String>,
    pub notes: Option<String>,
}
