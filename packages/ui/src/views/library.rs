//! Library screen: the user's loans and the catalog as rows of posters.

use api::{CatalogQuery, Operation};
use dioxus::prelude::*;

use crate::{load_catalog, use_gateway, use_session, BookRow, Navbar, UploadForm};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn LibraryView() -> Element {
    let gateway = use_gateway();
    let session = use_session();
    let mut reload = use_signal(|| 0u32);
    let mut search = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let can_upload = gateway.supports(Operation::Upload);

    let rows = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            // Subscribe to reload requests and the search text.
            let _ = reload();
            let query = CatalogQuery::search(search().trim());
            let user = session.peek().current().cloned()?;

            loading.set(true);
            let result = load_catalog(&gateway, &user, &query).await;
            loading.set(false);
            if let Err(e) = &result {
                tracing::warn!("catalog load failed: {e}");
            }
            Some(result)
        }
    });

    let on_changed = EventHandler::new(move |_: ()| reload += 1);

    // Rows from the previous load are hidden while a new one runs.
    let content = match (*rows.read()).clone() {
        _ if loading() => rsx! {
            p { class: "carregando", "Carregando..." }
        },
        Some(Some(Ok(rows))) => rsx! {
            for row in rows {
                BookRow { key: "{row.title}", row, on_changed }
            }
        },
        Some(Some(Err(e))) => rsx! {
            p { class: "erro", "{e}" }
        },
        Some(None) | None => rsx! {},
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        Navbar {
            input {
                class: "busca",
                r#type: "search",
                placeholder: "Buscar título ou autor",
                value: "{search}",
                oninput: move |evt| search.set(evt.value()),
            }
        }
        main {
            class: "biblioteca",
            if can_upload {
                UploadForm { on_uploaded: on_changed }
            }
            {content}
        }
    }
}
