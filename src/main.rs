use axum::{Router, http::HeaderValue};
use dotenvy::dotenv;
use stockwise_api::{
    config::app_config::AppConfig,
    inventory::{
        build_inventory_router,
        interfaces::rest::resources::{
            inventory_error_response_resource::InventoryErrorResponseResource,
            inventory_item_resource::InventoryItemResource,
            restock_acknowledgment_resource::RestockAcknowledgmentResource,
            restock_request_resource::RestockRequestResource,
        },
    },
    shared::interfaces::rest::{
        controllers::health_rest_controller::{self, HealthRestControllerState},
        openapi::security::TenantHeaderSecurityAddon,
        resources::health_status_resource::{HealthStatusResource, ServiceStatusResource},
    },
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        stockwise_api::inventory::interfaces::rest::controllers::inventory_rest_controller::get_inventory_item,
        stockwise_api::inventory::interfaces::rest::controllers::inventory_rest_controller::list_inventory,
        stockwise_api::inventory::interfaces::rest::controllers::inventory_rest_controller::list_low_stock_alerts,
        stockwise_api::inventory::interfaces::rest::controllers::inventory_rest_controller::request_restock,
        stockwise_api::shared::interfaces::rest::controllers::health_rest_controller::root,
        stockwise_api::shared::interfaces::rest::controllers::health_rest_controller::health_check
    ),
    components(
        schemas(
            InventoryItemResource,
            RestockRequestResource,
            RestockAcknowledgmentResource,
            InventoryErrorResponseResource,
            ServiceStatusResource,
            HealthStatusResource
        )
    ),
    tags(
        (name = "inventory", description = "Tenant-scoped stock levels and restock requests"),
        (name = "health", description = "Liveness endpoints")
    ),
    modifiers(&TenantHeaderSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let inventory_router = build_inventory_router(&config)
        .await
        .expect("failed to build inventory router");
    let health_router = health_rest_controller::router(HealthRestControllerState {
        service_name: config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    });

    let app = Router::new()
        .merge(health_router)
        .merge(inventory_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!("{} listening on http://localhost:{}", config.service_name, config.port);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            config
                .cors_allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
