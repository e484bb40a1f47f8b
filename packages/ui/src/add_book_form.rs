use api::NewBook;
use dioxus::prelude::*;

use crate::{show_toast, use_gateway, use_toasts, ToastLevel};

pub const BOOK_ADDED: &str = "Livro adicionado com sucesso!";

/// Admin form for adding a book to the catalog. Clears itself on success.
#[component]
pub fn AddBookForm() -> Element {
    let gateway = use_gateway();
    let mut toasts = use_toasts();
    let mut form = use_signal(NewBook::default);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            saving.set(true);
            let book = form();
            match gateway.add_book(&book).await {
                Ok(()) => {
                    show_toast(&mut toasts, ToastLevel::Success, BOOK_ADDED);
                    form.set(NewBook::default());
                }
                Err(e) => show_toast(&mut toasts, ToastLevel::Error, &format!("Erro: {e}")),
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            class: "form-admin",
            onsubmit: handle_submit,
            h3 { "Adicionar Livro" }
            input {
                r#type: "text",
                placeholder: "Título",
                value: "{form.read().titulo}",
                oninput: move |evt| form.write().titulo = evt.value(),
            }
            input {
                r#type: "text",
                placeholder: "Autor",
                value: "{form.read().autor}",
                oninput: move |evt| form.write().autor = evt.value(),
            }
            input {
                r#type: "text",
                placeholder: "Categoria",
                value: "{form.read().categoria}",
                oninput: move |evt| form.write().categoria = evt.value(),
            }
            input {
                r#type: "url",
                placeholder: "URL da capa (opcional)",
                value: "{form.read().capa_url}",
                oninput: move |evt| form.write().capa_url = evt.value(),
            }
            button {
                r#type: "submit",
                class: "btn-primario",
                disabled: saving(),
                if saving() { "Salvando..." } else { "Adicionar" }
            }
        }
    }
}
