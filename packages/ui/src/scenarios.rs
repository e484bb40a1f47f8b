//! Whole-flow tests: gateway, session and screen transitions driven together
//! the way the views drive them, against scripted backends.

use api::{ApiError, ApiFlavor, CatalogQuery, Credentials, Gateway, StubTransport};
use serde_json::json;
use store::{KeyValueStore, MemoryStore, Session};

use crate::catalog::{load_catalog, CardAction, MutationOutcome, RowKind, CATALOG_TITLE};
use crate::{shows_admin_button, Nav, Screen};

const KEY: &str = "usuarioBookflix";

struct Client {
    gateway: Gateway<StubTransport>,
    stub: StubTransport,
    session: Session<MemoryStore>,
    screen: Screen,
}

impl Client {
    fn new(stub: StubTransport) -> Self {
        let mut session = Session::new(MemoryStore::new(), KEY);
        session.restore();
        Self {
            gateway: Gateway::new(stub.clone(), "http://bookflix.test", ApiFlavor::Root),
            stub,
            screen: Screen::initial(session.is_authenticated()),
            session,
        }
    }

    fn go(&mut self, nav: Nav) {
        self.screen = self.screen.next(
            nav,
            self.session.is_authenticated(),
            self.session.is_admin(),
        );
    }

    async fn login(&mut self, email: &str, senha: &str) -> Result<(), ApiError> {
        let user = self.gateway.login(&Credentials::new(email, senha)).await?;
        self.session.login(user);
        self.go(Nav::LoggedIn);
        Ok(())
    }

    fn logout(&mut self) {
        self.session.logout();
        self.go(Nav::LoggedOut);
    }
}

#[tokio::test]
async fn test_login_shows_catalog_without_admin_button() {
    let stub = StubTransport::new()
        .respond(200, json!({"ok": true, "usuario": {"id": 1, "nome": "A", "ehAdmin": false}}))
        .respond(200, json!([]))
        .respond(200, json!({"itens": [{"id": 5, "title": "Dom Casmurro", "is_available": 1}]}));
    let mut client = Client::new(stub);
    assert_eq!(client.screen, Screen::Login);

    client.login("a@b.com", "x").await.unwrap();
    assert_eq!(client.screen, Screen::Library);
    assert!(!shows_admin_button(client.session.current()));

    let stored = client.session.store().get(KEY).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(stored["id"], 1);
    assert_eq!(stored["nome"], "A");

    let user = client.session.current().cloned().unwrap();
    let rows = load_catalog(&client.gateway, &user, &CatalogQuery::default())
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, CATALOG_TITLE);
    assert_eq!(
        CardAction::for_book(&rows[0].books[0], RowKind::Catalog),
        CardAction::Borrow
    );

    let sent = client.stub.requests();
    assert!(sent[0].url.ends_with("/entrar"));
    assert_eq!(sent[0].json().unwrap()["email"], "a@b.com");
}

#[tokio::test]
async fn test_failed_login_stays_on_login_screen() {
    let stub = StubTransport::new().respond(401, json!({"mensagem": "Senha incorreta"}));
    let mut client = Client::new(stub);

    let err = client.login("a@b.com", "errada").await.unwrap_err();
    assert_eq!(err.to_string(), "Senha incorreta");
    assert_eq!(client.screen, Screen::Login);
    assert!(client.session.store().is_empty());
}

#[tokio::test]
async fn test_blank_login_sends_nothing() {
    let mut client = Client::new(StubTransport::new());
    let err = client.login("", "x").await.unwrap_err();
    assert_eq!(err.to_string(), "Preencha todos os campos!");
    assert!(client.stub.requests().is_empty());
}

#[tokio::test]
async fn test_failed_borrow_keeps_catalog() {
    let catalog = json!({"itens": [{"id": 9, "title": "O Alienista", "is_available": 1}]});
    let stub = StubTransport::new()
        .respond(200, json!({"ok": true, "usuario": {"id": 2, "nome": "B"}}))
        .respond(200, json!([]))
        .respond(200, catalog)
        .respond(400, json!({"ok": false, "mensagem": "Já emprestado"}));
    let mut client = Client::new(stub);
    client.login("b@b.com", "y").await.unwrap();

    let user = client.session.current().cloned().unwrap();
    let before = load_catalog(&client.gateway, &user, &CatalogQuery::default())
        .await
        .unwrap();

    let card = &before[0].books[0];
    assert_eq!(CardAction::for_book(card, RowKind::Catalog), CardAction::Borrow);

    let result = client.gateway.borrow(user.id, card.id).await;
    assert_eq!(
        MutationOutcome::of(result),
        MutationOutcome::Notify("Já emprestado".to_string())
    );
    assert_eq!(client.stub.requests().len(), 4);
}

#[tokio::test]
async fn test_logout_from_every_screen() {
    for admin in [false, true] {
        for target in [Nav::BackToLibrary, Nav::OpenAdmin] {
            let stub = StubTransport::new().respond(
                200,
                json!({"ok": true, "usuario": {"id": 3, "nome": "C", "ehAdmin": admin}}),
            );
            let mut client = Client::new(stub);
            client.login("c@b.com", "z").await.unwrap();
            client.go(target);

            client.logout();
            assert_eq!(client.screen, Screen::Login);
            assert!(client.session.current().is_none());
            assert!(client.session.store().get(KEY).is_none());
        }
    }
}

#[tokio::test]
async fn test_restored_session_opens_library() {
    let store = MemoryStore::new();
    store
        .set(KEY, r#"{"id":4,"nome":"D","email":"d@b.com","ehAdmin":true}"#)
        .unwrap();
    let mut session = Session::new(store, KEY);
    session.restore();

    let screen = Screen::initial(session.is_authenticated());
    assert_eq!(screen, Screen::Library);
    assert!(shows_admin_button(session.current()));
    assert_eq!(
        screen.next(Nav::OpenAdmin, true, session.is_admin()),
        Screen::Admin
    );
}
