use std::sync::OnceLock;

use api::ClientConfig;
use dioxus::prelude::*;

use ui::{ActivityLogPanel, ClientProvider, Navbar};
use views::{Query, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Register {},
        #[route("/query")]
        Query {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// `userdesk.toml` baked in at build time.
const CONFIG_TOML: &str = include_str!("../userdesk.toml");

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Parse a config file, falling back to defaults if it is broken.
///
/// The problem is handed back rather than logged so `main` can report it once
/// the logger is up.
fn parse_config(source: &str) -> (ClientConfig, Option<String>) {
    match ClientConfig::from_toml(source) {
        Ok(config) => (config, None),
        Err(e) => (
            ClientConfig::default(),
            Some(format!("Invalid {}: {}", ClientConfig::filename(), e)),
        ),
    }
}

fn config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| parse_config(CONFIG_TOML).0)
}

fn main() {
    let (parsed, problem) = parse_config(CONFIG_TOML);
    let level = parsed
        .logging
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialise logging: {e}");
    }
    if let Some(problem) = problem {
        tracing::warn!("{}, using defaults", problem);
    }
    tracing::info!("Starting with {} query presets", parsed.queries.len());
    let _ = CONFIG.set(parsed);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config: config().clone(),
            Router::<Route> {}
        }
    }
}

/// Navigation bar and activity log around both panels.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Register {}, active_class: "active".to_string(), "登録" }
            Link { to: Route::Query {}, active_class: "active".to_string(), "検索" }
        }
        Outlet::<Route> {}
        ActivityLogPanel {}
    }
}
