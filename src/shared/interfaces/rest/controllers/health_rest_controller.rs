use axum::{Json, Router, extract::State, routing::get};

use crate::shared::interfaces::rest::resources::health_status_resource::{
    HealthStatusResource, ServiceStatusResource,
};

const HEALTHY: &str = "healthy";

#[derive(Clone)]
pub struct HealthRestControllerState {
    pub service_name: String,
    pub version: String,
}

pub fn router(state: HealthRestControllerState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service identity and liveness", body = ServiceStatusResource)
    )
)]
pub async fn root(State(state): State<HealthRestControllerState>) -> Json<ServiceStatusResource> {
    Json(ServiceStatusResource {
        service: state.service_name,
        status: HEALTHY.to_string(),
        version: state.version,
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Liveness probe", body = HealthStatusResource)
    )
)]
pub async fn health_check() -> Json<HealthStatusResource> {
    Json(HealthStatusResource {
        status: HEALTHY.to_string(),
    })
}
