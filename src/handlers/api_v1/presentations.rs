use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::errors::AppError;
use crate::gateway::Gateway;
use crate::models::presentation::DEFAULT_TITLE;
use crate::models::Theme;
use crate::templates_structs::{
    ApiErrorResponse, CreatePresentationRequest, PresentationDetailResponse,
};

/// GET /api/v1/presentations - All presentations, most recently updated first
pub async fn list(gateway: web::Data<dyn Gateway>) -> Result<HttpResponse, AppError> {
    let presentations = gateway.list_presentations().await?;
    Ok(HttpResponse::Ok().json(presentations))
}

/// POST /api/v1/presentations - Create a presentation
pub async fn create(
    gateway: web::Data<dyn Gateway>,
    body: web::Json<CreatePresentationRequest>,
) -> Result<HttpResponse, AppError> {
    let title = body
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE);
    let theme = body.theme.as_deref().map(Theme::resolve).unwrap_or_default();

    let presentation = gateway.create_presentation(title, theme.as_str()).await?;
    log::info!("Created presentation {} via API", presentation.id);
    Ok(HttpResponse::Created().json(presentation))
}

/// GET /api/v1/presentations/{id} - One presentation with its slides in order
pub async fn read(
    gateway: web::Data<dyn Gateway>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let Some(presentation) = gateway.get_presentation(id).await? else {
        return Ok(HttpResponse::NotFound().json(ApiErrorResponse::new("Presentation not found")));
    };
    let slides = gateway.list_slides(id).await?;
    Ok(HttpResponse::Ok().json(PresentationDetailResponse { presentation, slides }))
}
