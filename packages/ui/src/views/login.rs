//! Login screen with email/password form.

use api::Credentials;
use dioxus::prelude::*;

use crate::{use_gateway, use_router, use_session, Nav};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn LoginView() -> Element {
    let gateway = use_gateway();
    let mut session = use_session();
    let mut router = use_router();
    let mut email = use_signal(String::new);
    let mut senha = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let credentials = Credentials::new(email(), senha());
            match gateway.login(&credentials).await {
                Ok(user) => {
                    session.write().login(user);
                    senha.set(String::new());
                    router.go(Nav::LoggedIn);
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
                onsubmit: handle_login,
                h2 { "Entrar" }

                if let Some(err) = error() {
                    div { class: "erro", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Senha",
                    value: "{senha}",
                    oninput: move |evt| senha.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn-primario",
                    disabled: loading(),
                    if loading() { "Entrando..." } else { "Entrar" }
                }
            }
            p {
                class: "troca-auth",
                "Novo por aqui? "
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        router.go(Nav::ShowRegister);
                    },
                    "Cadastre-se"
                }
            }
        }
    }
}
