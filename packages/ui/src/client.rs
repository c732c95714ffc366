//! Shared API client and configuration context for all panels.
//!
//! The base URL comes from [`api::ClientConfig`]:
//! - **Web** (WASM): the configured `base_url`, else the page origin
//! - **Native**: the configured `base_url`, else `http://127.0.0.1:8000`
//!
//! [`ClientProvider`] builds the client once; panels read it with
//! [`use_user_api`] and share its connection pool.

use api::{ApiError, ClientConfig, HttpTransport, UserApi};
use dioxus::prelude::*;

use crate::activity_log::ActivityLog;

/// The client every panel talks through, or why it could not be built.
pub type ApiClient = Result<UserApi<HttpTransport>, ApiError>;

/// Create an HTTP-backed client for the configured API.
pub fn make_api(config: &ClientConfig) -> ApiClient {
    let base = config.resolve_base_url(page_origin().as_deref());
    let api = UserApi::new(HttpTransport::new(&base)?);
    tracing::info!("API client bound to {}", base);
    Ok(api)
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

/// Configuration provided by [`ClientProvider`].
pub fn use_client_config() -> Signal<ClientConfig> {
    use_context::<Signal<ClientConfig>>()
}

/// The shared client provided by [`ClientProvider`].
pub fn use_user_api() -> Signal<ApiClient> {
    use_context::<Signal<ApiClient>>()
}

/// Provides the configuration, the API client and the activity log to its
/// children.
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    let api = use_signal(|| {
        let api = make_api(&config);
        if let Err(e) = &api {
            tracing::warn!("API client unavailable: {}", e);
        }
        api
    });
    let config = use_signal(move || config);
    use_context_provider(|| config);
    use_context_provider(|| api);
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        {children}
    }
}
