use api::Operation;
use dioxus::prelude::*;
use store::Book;

use crate::catalog::{CardAction, CardState, MutationOutcome, Row, RowKind, EMPTY_ROW};
use crate::{show_toast, use_config, use_gateway, use_session, use_toasts, ToastLevel};

/// Poster for one book with its borrow/return affordance.
///
/// Fires `on_changed` after a successful mutation so the owner reloads the
/// catalog; the card itself never flips state.
#[component]
pub fn BookCard(book: Book, kind: RowKind, on_changed: EventHandler<()>) -> Element {
    let config = use_config();
    let gateway = use_gateway();
    let session = use_session();
    let mut toasts = use_toasts();
    let mut busy = use_signal(|| false);

    let state = CardState::of(&book, kind);
    let action = CardAction::for_book(&book, kind);
    let lending = gateway.supports(Operation::Borrow);
    let cover = book.cover(&config.ui.placeholder_cover).to_string();
    let file_link = book.filename.as_deref().map(|f| gateway.file_url(f));
    let book_id = book.id;
    let lent_since = match kind {
        RowKind::Personal => book.lent_since().map(str::to_string),
        RowKind::Catalog => None,
    };

    let handle_action = {
        let action = action.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            if busy() {
                return;
            }
            let Some(user_id) = session.read().current().map(|u| u.id) else {
                return;
            };
            busy.set(true);
            let gateway = gateway.clone();
            let action = action.clone();
            spawn(async move {
                let result = match action {
                    CardAction::Return => gateway.give_back(user_id, book_id).await,
                    _ => gateway.borrow(user_id, book_id).await,
                };
                busy.set(false);
                match MutationOutcome::of(result) {
                    MutationOutcome::Reload => on_changed.call(()),
                    MutationOutcome::Notify(message) => {
                        show_toast(&mut toasts, ToastLevel::Error, &message)
                    }
                }
            });
        }
    };

    let affordance = if !lending {
        rsx! {}
    } else if action.is_button() {
        rsx! {
            button {
                class: action.class(),
                disabled: busy(),
                onclick: handle_action,
                "{action.label()}"
            }
        }
    } else {
        rsx! {
            div { class: action.class(), "{action.label()}" }
        }
    };

    rsx! {
        div {
            class: state.class(),
            img {
                class: "poster-img",
                src: "{cover}",
                alt: "{book.title}",
            }
            div {
                class: "poster-info",
                span { class: "poster-title", "{book.title}" }
                span { class: "poster-author", "{book.author_or_unknown()}" }
                if let Some(category) = book.category_label() {
                    span { class: "poster-category", "{category}" }
                }
                if let Some(since) = lent_since {
                    span { class: "poster-since", "Desde {since}" }
                }
                if let Some(href) = file_link {
                    a {
                        class: "poster-file",
                        href: "{href}",
                        target: "_blank",
                        "Abrir arquivo"
                    }
                }
            }
            div { class: "poster-acoes", {affordance} }
        }
    }
}

/// A titled strip of [`BookCard`]s.
#[component]
pub fn BookRow(row: Row, on_changed: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "linha",
            h3 { "{row.title}" }
            div {
                class: "linha-posters",
                if row.books.is_empty() {
                    p { class: "linha-vazia", "{EMPTY_ROW}" }
                }
                for book in row.books.iter().cloned() {
                    BookCard {
                        key: "{book.id}",
                        book,
                        kind: row.kind,
                        on_changed,
                    }
                }
            }
        }
    }
}
