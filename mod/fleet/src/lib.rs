pub mod api;
pub mod model;
pub mod query;
pub mod service;
pub mod validation;

use std::sync::Arc;

use axum::Router;
use mottag_core::Module;

use service::FleetService;

/// Fleet module — yard, moto and RFID tag management.
pub struct FleetModule {
    service: Arc<FleetService>,
}

impl FleetModule {
    pub fn new(service: FleetService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for FleetModule {
    fn name(&self) -> &str {
        "fleet"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
