#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub service_name: String,
    pub log_filter: String,
    pub cors_allowed_origins: Vec<String>,
    /// `None` means every tenant present in the inventory fixture is accepted.
    pub known_tenants: Option<Vec<String>>,
    pub inventory_fixture_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "StockWise API".to_string()),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
            known_tenants: std::env::var("KNOWN_TENANTS")
                .ok()
                .map(|raw| split_list(&raw))
                .filter(|tenants| !tenants.is_empty()),
            inventory_fixture_path: std::env::var("INVENTORY_FIXTURE_PATH")
                .ok()
                .map(|path| path.trim().to_string())
                .filter(|path| !path.is_empty()),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.is_empty()
            || self.cors_allowed_origins.iter().any(|origin| origin == "*")
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
