pub mod presentations;
pub mod slides;

use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, header},
    middleware::{Next, from_fn},
    web,
};

use crate::templates_structs::ApiErrorResponse;

/// Deck and slide writes only accept JSON bodies, which keeps the cookie
/// session out of reach of cross-site form posts. Reads pass through.
async fn json_writes_only(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let is_write = matches!(*req.method(), Method::POST | Method::PUT | Method::DELETE);
    let is_json = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    if is_write && !is_json {
        let response = HttpResponse::BadRequest()
            .json(ApiErrorResponse::new("Deck and slide writes must be sent as application/json"));
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/presentations")
            .wrap(from_fn(json_writes_only))
            .route("", web::get().to(presentations::list))
            .route("", web::post().to(presentations::create))
            .route("/{id}", web::get().to(presentations::read)),
    );
    cfg.service(
        web::scope("/slides")
            .wrap(from_fn(json_writes_only))
            .route("/{id}", web::put().to(slides::update)),
    );
}
