use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::gateway::{Gateway, GatewayError};
use crate::models::SlidePatch;
use crate::templates_structs::{ApiErrorResponse, UpdateSlideRequest};

/// PUT /api/v1/slides/{id} - Partial slide update
pub async fn update(
    gateway: web::Data<dyn Gateway>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateSlideRequest>,
) -> Result<HttpResponse, AppError> {
    let slide_id = path.into_inner();
    let body = body.into_inner();
    let patch = SlidePatch {
        title: body.title,
        content: body.content,
        layout: body.layout,
        notes: body.notes,
        order_index: None,
        updated_at: Utc::now(),
    };
    if patch.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse::new("Nothing to update")));
    }

    match gateway.update_slide(slide_id, &patch).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(GatewayError::NotFound) => {
            Ok(HttpResponse::NotFound().json(ApiErrorResponse::new("Slide not found")))
        }
        Err(e) => Err(e.into()),
    }
}
