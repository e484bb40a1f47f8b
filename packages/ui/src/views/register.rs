use api::Registration;
use dioxus::prelude::*;

use crate::{show_toast, use_gateway, use_router, use_toasts, Nav, ToastLevel};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

pub const REGISTERED: &str = "Cadastro realizado! Faça login.";

/// Registration screen. A successful registration does not log in; the user
/// is sent back to the login screen.
#[component]
pub fn RegisterView() -> Element {
    let gateway = use_gateway();
    let mut router = use_router();
    let mut toasts = use_toasts();
    let mut form = use_signal(Registration::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let registration = form();
            match gateway.register(&registration).await {
                Ok(()) => {
                    show_toast(&mut toasts, ToastLevel::Success, REGISTERED);
                    form.set(Registration::default());
                    router.go(Nav::ShowLogin);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "tela-auth",
            h1 { class: "logo", "BOOKFLIX" }
            form {
                class: "form-auth",
                onsubmit: handle_register,
                h2 { "Criar conta" }

                if let Some(err) = error() {
                    div { class: "erro", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Nome",
                    value: "{form.read().nome}",
                    oninput: move |evt| form.write().nome = evt.value(),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{form.read().email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                input {
                    r#type: "password",
                    placeholder: "Senha",
                    value: "{form.read().senha}",
                    oninput: move |evt| form.write().senha = evt.value(),
                }
                button {
                    r#type: "submit",
                    class: "btn-primario",
                    disabled: loading(),
                    if loading() { "Cadastrando..." } else { "Cadastrar" }
                }
            }
            p {
                class: "troca-auth",
                "Já tem conta? "
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        router.go(Nav::ShowLogin);
                    },
                    "Entrar"
                }
            }
        }
    }
}
