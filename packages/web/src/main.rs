use dioxus::prelude::*;

use store::LibraryConfig;
use ui::views::{AdminView, LibraryView, LoginView, RegisterView};
use ui::{use_router, ClientProvider, Screen, ToastStack};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Deployment settings, baked in at build time.
const CONFIG_TOML: &str = include_str!("../bookflix.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> LibraryConfig {
    match LibraryConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("invalid {}, using defaults: {e}", LibraryConfig::filename());
            LibraryConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config,
            Screens {}
            ToastStack {}
        }
    }
}

/// Renders the one visible screen.
#[component]
fn Screens() -> Element {
    let router = use_router();

    match router.current() {
        Screen::Login => rsx! { LoginView {} },
        Screen::Register => rsx! { RegisterView {} },
        Screen::Library => rsx! { LibraryView {} },
        Screen::Admin => rsx! { AdminView {} },
    }
}
