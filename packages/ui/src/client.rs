//! Application context: configuration, gateway, session, current screen and
//! toasts, provided once at the root and read by every view.

use api::{Gateway, HttpTransport};
use dioxus::prelude::*;
use store::{LibraryConfig, Session};

use crate::screen::Screen;
use crate::toast::Toasts;

/// Gateway type used by the running application.
pub type AppGateway = Gateway<HttpTransport>;

/// Session storage: `localStorage` in the browser, memory elsewhere.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStore = store::MemoryStore;

pub type AppSession = Session<AppStore>;

/// Origin of the current page, used when no backend URL is configured.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> String {
    "http://localhost:5000".to_string()
}

pub fn use_config() -> LibraryConfig {
    use_context::<LibraryConfig>()
}

pub fn use_gateway() -> AppGateway {
    use_context::<AppGateway>()
}

/// Provider component that owns the client state.
///
/// Restores the persisted session before the first render, so a returning
/// user lands directly on the library.
#[component]
pub fn ClientProvider(config: LibraryConfig, children: Element) -> Element {
    let config = use_context_provider(|| config.clone());

    use_context_provider(|| {
        let base_url = config.resolve_base_url(&page_origin());
        tracing::info!(%base_url, flavor = ?config.api.flavor, "backend configured");
        Gateway::new(HttpTransport::new(), base_url, config.api.flavor)
    });

    let session = use_context_provider(|| {
        let mut session = Session::new(AppStore::new(), config.session.storage_key.clone());
        session.restore();
        Signal::new(session)
    });

    use_context_provider(|| Signal::new(Screen::initial(session.peek().is_authenticated())));
    use_context_provider(|| Signal::new(Toasts::new(config.ui.toast_secs)));

    rsx! {
        {children}
    }
}
