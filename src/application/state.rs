use std::sync::Arc;

use crate::domain::registry::ImageRegistry;
use crate::infrastructure::registry::InMemoryImageRegistry;

/// Configuration for external services — everything that varies between
/// production and test environments.
pub struct AppStateConfig {
    pub public_url: String,
    pub image_api_url: String,
    pub text_api_url: String,
}

#[derive(Clone)]
pub struct AppState {
    pub image_registry: Arc<dyn ImageRegistry>,
    pub http_client: reqwest::Client,
    pub public_url: String,
    pub image_api_url: String,
    pub text_api_url: String,
}

impl AppState {
    /// Build the full application state. The registry is created here and
    /// torn down with the process.
    pub fn new(config: AppStateConfig) -> Self {
        Self {
            image_registry: Arc::new(InMemoryImageRegistry::new()),
            #[allow(clippy::expect_used)]
            http_client: reqwest::ClientBuilder::new()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("failed to build HTTP client"),
            public_url: config.public_url.trim_end_matches('/').to_string(),
            image_api_url: config.image_api_url,
            text_api_url: config.text_api_url,
        }
    }

    /// Public URL under which a cached image is served.
    pub fn image_url(&self, image_id: &str) -> String {
        format!("{}/cdn/images/{image_id}.png", self.public_url)
    }
}
