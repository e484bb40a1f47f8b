use api::{Upload, UploadFile};
use dioxus::prelude::*;

use crate::{show_toast, use_gateway, use_toasts, ToastLevel};

pub const BOOK_SENT: &str = "Livro enviado com sucesso!";

/// Upload a book file with its title and author.
///
/// Only rendered for backends that accept uploads. `on_uploaded` fires after
/// the backend accepts the file so the catalog can reload.
#[component]
pub fn UploadForm(on_uploaded: EventHandler<()>) -> Element {
    let gateway = use_gateway();
    let mut toasts = use_toasts();
    let mut titulo = use_signal(String::new);
    let mut autor = use_signal(String::new);
    let mut arquivo = use_signal(|| Option::<UploadFile>::None);
    let mut sending = use_signal(|| false);

    let handle_file = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            arquivo.set(None);
            return;
        };
        match engine.read_file(&name).await {
            Some(bytes) => arquivo.set(Some(UploadFile { name, bytes })),
            None => {
                tracing::warn!(file = %name, "could not read selected file");
                arquivo.set(None);
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            let upload = Upload {
                titulo: titulo(),
                autor: autor(),
                arquivo: arquivo(),
            };
            sending.set(true);
            let result = gateway.upload_book(&upload).await;
            sending.set(false);
            match result {
                Ok(()) => {
                    show_toast(&mut toasts, ToastLevel::Success, BOOK_SENT);
                    titulo.set(String::new());
                    autor.set(String::new());
                    arquivo.set(None);
                    on_uploaded.call(());
                }
                Err(e) => show_toast(&mut toasts, ToastLevel::Error, &e.to_string()),
            }
        });
    };

    rsx! {
        form {
            class: "form-upload",
            onsubmit: handle_submit,
            h3 { "Enviar Livro" }
            input {
                r#type: "text",
                placeholder: "Título",
                value: "{titulo}",
                oninput: move |evt| titulo.set(evt.value()),
            }
            input {
                r#type: "text",
                placeholder: "Autor",
                value: "{autor}",
                oninput: move |evt| autor.set(evt.value()),
            }
            input {
                r#type: "file",
                onchange: handle_file,
            }
            button {
                r#type: "submit",
                class: "btn-primario",
                disabled: sending(),
                if sending() { "Enviando..." } else { "Enviar" }
            }
        }
    }
}
