pub mod api_client;
pub mod config;

use std::cell::RefCell;

use config::ApiConfig;

thread_local! {
    static API_CONFIG: RefCell<Option<ApiConfig>> = RefCell::new(None);
}

/// Initialise the API configuration once at startup.  Prefers the build-time
/// `API_BASE_URL` override; otherwise the backend is assumed to live on the
/// page's own origin (same-origin deployment).
pub fn init_api_config() {
    let config = match ApiConfig::from_build_env() {
        Ok(cfg) => cfg,
        Err(_) => ApiConfig::from_window_origin(),
    };
    API_CONFIG.with(|c| *c.borrow_mut() = Some(config));
}

/// Base URL for all API calls.  Empty string means relative URLs against the
/// current origin, exactly what a same-origin deployment wants.
pub fn get_api_base_url() -> String {
    API_CONFIG.with(|c| {
        c.borrow()
            .as_ref()
            .map(|cfg| cfg.base_url().to_string())
            .unwrap_or_default()
    })
}
