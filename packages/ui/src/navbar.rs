use dioxus::prelude::*;

use crate::{shows_admin_button, use_gateway, use_router, use_session, Nav};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Header of the authenticated screens: brand, user name, admin toggle and
/// logout. Extra controls for the current screen go in `children`.
#[component]
pub fn Navbar(children: Element) -> Element {
    let mut session = use_session();
    let mut router = use_router();
    let gateway = use_gateway();

    let user = session.read().current().cloned();
    let name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let show_admin = shows_admin_button(user.as_ref());

    let handle_logout = move |_| {
        let gateway = gateway.clone();
        spawn(async move {
            if let Err(e) = gateway.logout().await {
                tracing::warn!("backend logout failed: {e}");
            }
            session.write().logout();
            router.go(Nav::LoggedOut);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "navbar",
            span { class: "logo", "BOOKFLIX" }
            div {
                class: "navbar-actions",
                {children}
                span { class: "user-name", "Olá, {name}" }
                if show_admin {
                    button {
                        class: "btn-admin",
                        onclick: move |_| router.go(Nav::OpenAdmin),
                        "Painel Admin"
                    }
                }
                button {
                    class: "btn-sair",
                    onclick: handle_logout,
                    "Sair"
                }
            }
        }
    }
}
