/// API route configuration
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create an ApiConfig from the `API_BASE_URL` environment variable baked
    /// in at build time.  Deployments that serve the frontend from the same
    /// origin as the backend can skip this and rely on
    /// [`ApiConfig::from_window_origin`].
    pub fn from_build_env() -> Result<Self, &'static str> {
        if let Some(url) = option_env!("API_BASE_URL") {
            Ok(Self::from_url(url))
        } else {
            Err("API_BASE_URL environment variable is not set")
        }
    }

    /// Fall back to the page's own origin; an empty base yields relative
    /// `/api/...` URLs which the browser resolves against it anyway.
    pub fn from_window_origin() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::from_url(&origin)
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
