use dioxus::prelude::*;

use crate::loans::{LoanRow, EMPTY_HISTORY};
use crate::{use_gateway, use_router, AddBookForm, Nav, Navbar};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Admin area: add-book form and the full loan history.
#[component]
pub fn AdminView() -> Element {
    let mut router = use_router();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        Navbar {
            button {
                class: "btn-voltar",
                onclick: move |_| router.go(Nav::BackToLibrary),
                "Voltar à Biblioteca"
            }
        }
        main {
            class: "admin",
            h2 { "Painel Administrativo" }
            AddBookForm {}
            AdminTable {}
        }
    }
}

/// Every loan, open or closed, one row each.
#[component]
pub fn AdminTable() -> Element {
    let gateway = use_gateway();

    let loans = use_resource(move || {
        let gateway = gateway.clone();
        async move { gateway.admin_loans().await.map(|loans| LoanRow::table(&loans)) }
    });

    let body = match (*loans.read()).clone() {
        None => rsx! {
            tr { td { colspan: "6", "Carregando..." } }
        },
        Some(Err(e)) => rsx! {
            tr { td { colspan: "6", class: "erro", "{e}" } }
        },
        Some(Ok(rows)) if rows.is_empty() => rsx! {
            tr { td { colspan: "6", "{EMPTY_HISTORY}" } }
        },
        Some(Ok(rows)) => rsx! {
            for row in rows {
                tr {
                    key: "{row.id}",
                    td { "{row.id}" }
                    td { class: "titulo", "{row.title}" }
                    td { "{row.user}" }
                    td { "{row.loan_date}" }
                    td { "{row.return_date}" }
                    td { class: row.status.class(), "{row.status.label()}" }
                }
            }
        },
    };

    rsx! {
        h3 { "Histórico de Empréstimos" }
        table {
            class: "tabela-emprestimos",
            thead {
                tr {
                    th { "ID" }
                    th { "Livro" }
                    th { "Usuário" }
                    th { "Empréstimo" }
                    th { "Devolução" }
                    th { "Status" }
                }
            }
            tbody { {body} }
        }
    }
}
