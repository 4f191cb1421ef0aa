pub mod config;
pub mod db;
pub mod editor;
pub mod errors;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod present;
pub mod render;
pub mod session;
pub mod templates_structs;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};

use crate::gateway::Gateway;

/// Application routes and shared state, without process-level middleware.
/// Used by `main` and by the integration tests.
pub fn app(
    gateway: Arc<dyn Gateway>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(gateway))
        .configure(handlers::configure)
}
