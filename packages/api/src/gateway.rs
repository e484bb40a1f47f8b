//! # Gateway: every backend call goes through here
//!
//! [`Gateway::request`] is the single boundary between the UI and the network.
//! It resolves an [`Operation`] against the configured [`ApiFlavor`], sends it
//! through a [`Transport`] and folds every outcome into a [`Reply`]:
//!
//! | Outcome | `ok` | `data` |
//! |---------|------|--------|
//! | 2xx, body parses, no `"ok": false` | `true` | parsed body |
//! | 2xx, body does not parse | `true` | `{"mensagem": "Erro inesperado"}` |
//! | 2xx with `"ok": false` in the body | `false` | parsed body |
//! | non-2xx, body parses | `false` | parsed body |
//! | non-2xx, body does not parse | `false` | `{"mensagem": "Erro inesperado"}` |
//! | network failure | `false` | `{"mensagem": "Erro de conexão"}` |
//!
//! `request` itself cannot fail. The typed operations (`login`, `borrow`, ...)
//! validate their form first, then turn a failed [`Reply`] into an
//! [`ApiError`] and decode the success payload into store models. Operations
//! that read the payload ([`Reply::into_payload`]) treat an unparsed body as
//! [`ApiError::Connection`]; mutations only need the status.
//!
//! Response shapes differ between the two backends; the decoders accept both:
//! messages under `mensagem` or `msg`, the user under `usuario` or `user`,
//! lists as a bare array or under `itens` or `books`.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use store::{ApiFlavor, Book, Loan, User};

use crate::endpoints::{endpoint, Operation, UPLOADS_PATH};
use crate::error::{ApiError, CONNECTION_ERROR, UNEXPECTED_ERROR};
use crate::forms::{CatalogQuery, Credentials, NewBook, Registration, Upload};
use crate::transport::{Body, FormPart, HttpRequest, Transport};

/// What to send with an operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    None,
    Query(Vec<(String, String)>),
    Json(Value),
    Multipart(Vec<FormPart>),
}

/// Uniform result of [`Gateway::request`].
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub ok: bool,
    pub data: Value,
    /// HTTP status, `None` when no response was received.
    pub status: Option<u16>,
    /// Whether `data` came from the response body.
    pub parsed: bool,
}

impl Reply {
    fn connection_failure() -> Self {
        Self {
            ok: false,
            data: json!({ "mensagem": CONNECTION_ERROR }),
            status: None,
            parsed: false,
        }
    }

    /// Human-readable message carried by the body, if any.
    pub fn message(&self) -> Option<&str> {
        ["mensagem", "msg"]
            .iter()
            .find_map(|key| self.data.get(*key)?.as_str())
            .filter(|m| !m.trim().is_empty())
    }

    /// The body on success, otherwise the matching [`ApiError`].
    ///
    /// `fallback` is the message used when a rejection carries none.
    pub fn into_result(self, fallback: &str) -> Result<Value, ApiError> {
        if self.ok {
            return Ok(self.data);
        }
        if self.status.is_none() {
            return Err(ApiError::Connection);
        }
        let message = self.message().unwrap_or(fallback).to_string();
        Err(ApiError::Rejected(message))
    }

    /// Like [`into_result`](Reply::into_result), but a success whose body did
    /// not parse is a [`ApiError::Connection`]: there is no payload to read.
    pub fn into_payload(self, fallback: &str) -> Result<Value, ApiError> {
        if self.ok && !self.parsed {
            tracing::warn!(status = ?self.status, "success response without a JSON body");
            return Err(ApiError::Connection);
        }
        self.into_result(fallback)
    }
}

fn decode<D: DeserializeOwned>(value: Value) -> Result<D, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        tracing::warn!("unexpected response shape: {e}");
        ApiError::Connection
    })
}

/// Pull the list out of a bare array or an `itens` / `books` envelope.
fn list<D: DeserializeOwned>(data: Value) -> Result<Vec<D>, ApiError> {
    let items = match data {
        Value::Array(_) => data,
        Value::Object(mut map) => match map.remove("itens").or_else(|| map.remove("books")) {
            Some(items) => items,
            None => {
                tracing::warn!("list response without an itens/books envelope");
                return Err(ApiError::Connection);
            }
        },
        _ => return Err(ApiError::Connection),
    };
    decode(items)
}

/// Typed access to the lending backend.
#[derive(Clone, Debug)]
pub struct Gateway<T> {
    transport: T,
    base_url: String,
    flavor: ApiFlavor,
}

impl<T: Transport> Gateway<T> {
    /// `base_url` is scheme and host, e.g. `http://localhost:5000`.
    pub fn new(transport: T, base_url: impl Into<String>, flavor: ApiFlavor) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            flavor,
        }
    }

    pub fn flavor(&self) -> ApiFlavor {
        self.flavor
    }

    pub fn supports(&self, operation: Operation) -> bool {
        endpoint(self.flavor, operation).is_some()
    }

    /// Where an uploaded book file can be opened.
    pub fn file_url(&self, filename: &str) -> String {
        format!("{}{}{}", self.base_url, UPLOADS_PATH, filename)
    }

    fn require(&self, operation: Operation) -> Result<(), ApiError> {
        if self.supports(operation) {
            Ok(())
        } else {
            Err(ApiError::Unsupported(operation))
        }
    }

    /// Send `operation` and fold the outcome into a [`Reply`].
    pub async fn request(&self, operation: Operation, payload: Payload) -> Reply {
        let Some(endpoint) = endpoint(self.flavor, operation) else {
            tracing::warn!(%operation, flavor = ?self.flavor, "operation not available");
            return Reply {
                ok: false,
                data: json!({ "mensagem": ApiError::Unsupported(operation).to_string() }),
                status: None,
                parsed: false,
            };
        };

        let (query, body) = match payload {
            Payload::None => (Vec::new(), Body::Empty),
            Payload::Query(query) => (query, Body::Empty),
            Payload::Json(value) => (Vec::new(), Body::Json(value)),
            Payload::Multipart(parts) => (Vec::new(), Body::Multipart(parts)),
        };
        let request = HttpRequest {
            method: endpoint.method,
            url: format!("{}{}", self.base_url, endpoint.path),
            query,
            body,
        };
        tracing::debug!(%operation, url = %request.url, "sending request");

        match self.transport.send(request).await {
            Ok(response) => {
                let parsed = serde_json::from_str::<Value>(&response.body).ok();
                let is_parsed = parsed.is_some();
                let data = parsed.unwrap_or_else(|| json!({ "mensagem": UNEXPECTED_ERROR }));
                let body_ok = data.get("ok").and_then(Value::as_bool) != Some(false);
                let ok = response.is_success() && body_ok;
                if !ok {
                    tracing::debug!(%operation, status = response.status, "request rejected");
                }
                Reply {
                    ok,
                    data,
                    status: Some(response.status),
                    parsed: is_parsed,
                }
            }
            Err(e) => {
                tracing::error!(%operation, "{e}");
                Reply::connection_failure()
            }
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        credentials.validate()?;
        self.require(Operation::Login)?;
        let mut data = self
            .request(Operation::Login, Payload::Json(credentials.to_json()))
            .await
            .into_payload(UNEXPECTED_ERROR)?;
        let key = if data.get("usuario").is_some() {
            "usuario"
        } else {
            "user"
        };
        let user = data.get_mut(key).map(Value::take).unwrap_or(Value::Null);
        decode(user)
    }

    pub async fn register(&self, form: &Registration) -> Result<(), ApiError> {
        form.validate()?;
        self.require(Operation::Register)?;
        self.request(Operation::Register, Payload::Json(form.to_json()))
            .await
            .into_result(UNEXPECTED_ERROR)?;
        Ok(())
    }

    /// Tell the backend the session ended. A no-op for backends without a
    /// logout endpoint.
    pub async fn logout(&self) -> Result<(), ApiError> {
        if !self.supports(Operation::Logout) {
            return Ok(());
        }
        self.request(Operation::Logout, Payload::None)
            .await
            .into_result("Erro ao sair!")?;
        Ok(())
    }

    pub async fn list_catalog(&self, query: &CatalogQuery) -> Result<Vec<Book>, ApiError> {
        self.require(Operation::ListCatalog)?;
        let data = self
            .request(
                Operation::ListCatalog,
                Payload::Query(query.to_query(self.flavor)),
            )
            .await
            .into_payload("Erro ao carregar livros.")?;
        list(data)
    }

    /// Books currently lent to `user_id`.
    pub async fn list_my_loans(&self, user_id: i64) -> Result<Vec<Book>, ApiError> {
        self.require(Operation::ListMyLoans)?;
        let query = vec![("idUsuario".to_string(), user_id.to_string())];
        let data = self
            .request(Operation::ListMyLoans, Payload::Query(query))
            .await
            .into_payload("Erro ao carregar livros.")?;
        list(data)
    }

    pub async fn borrow(&self, user_id: i64, book_id: i64) -> Result<(), ApiError> {
        self.require(Operation::Borrow)?;
        let payload = json!({ "idUsuario": user_id, "idLivro": book_id });
        self.request(Operation::Borrow, Payload::Json(payload))
            .await
            .into_result("Erro ao emprestar.")?;
        Ok(())
    }

    /// Return a borrowed book. (`return` is a keyword.)
    pub async fn give_back(&self, user_id: i64, book_id: i64) -> Result<(), ApiError> {
        self.require(Operation::Return)?;
        let payload = json!({ "idUsuario": user_id, "idLivro": book_id });
        self.request(Operation::Return, Payload::Json(payload))
            .await
            .into_result("Erro ao devolver.")?;
        Ok(())
    }

    /// Full loan history, newest first as sent by the backend.
    pub async fn admin_loans(&self) -> Result<Vec<Loan>, ApiError> {
        self.require(Operation::AdminLoans)?;
        let data = self
            .request(Operation::AdminLoans, Payload::None)
            .await
            .into_payload("Erro ao carregar empréstimos.")?;
        list(data)
    }

    pub async fn add_book(&self, form: &NewBook) -> Result<(), ApiError> {
        form.validate()?;
        self.require(Operation::AddBook)?;
        self.request(Operation::AddBook, Payload::Json(form.to_json()))
            .await
            .into_result("Erro ao adicionar livro")?;
        Ok(())
    }

    pub async fn upload_book(&self, form: &Upload) -> Result<(), ApiError> {
        form.validate()?;
        self.require(Operation::Upload)?;
        self.request(Operation::Upload, Payload::Multipart(form.to_parts()))
            .await
            .into_result("Erro ao enviar livro.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::UploadFile;
    use crate::stub::StubTransport;
    use crate::transport::Method;

    const BASE: &str = "http://lib.test";

    fn root(stub: &StubTransport) -> Gateway<StubTransport> {
        Gateway::new(stub.clone(), BASE, ApiFlavor::Root)
    }

    fn prefixed(stub: &StubTransport) -> Gateway<StubTransport> {
        Gateway::new(stub.clone(), format!("{BASE}/"), ApiFlavor::Prefixed)
    }

    #[tokio::test]
    async fn test_login_root_backend() {
        let stub = StubTransport::new().respond(
            200,
            json!({
                "mensagem": "Login bem-sucedido",
                "usuario": {"id": 1, "nome": "A", "email": "a@b.com", "ehAdmin": false}
            }),
        );
        let user = root(&stub)
            .login(&Credentials::new("a@b.com", "x"))
            .await
            .unwrap();
        assert_eq!(user.id, 1);
        assert!(!user.is_admin);

        let sent = stub.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "http://lib.test/entrar");
        assert_eq!(sent[0].json(), Some(&json!({"email": "a@b.com", "senha": "x"})));
    }

    #[tokio::test]
    async fn test_login_prefixed_backend() {
        let stub = StubTransport::new().respond(
            200,
            json!({"ok": true, "msg": "Login efetuado.", "user": {"id": 9, "nome": "B", "email": "b@c.com"}}),
        );
        let user = prefixed(&stub)
            .login(&Credentials::new("b@c.com", "pw"))
            .await
            .unwrap();
        assert_eq!(user.name, "B");
        assert!(!user.is_admin);
        assert_eq!(stub.requests()[0].url, "http://lib.test/api/login");
    }

    #[tokio::test]
    async fn test_login_rejected_uses_backend_message() {
        let stub = StubTransport::new().respond(401, json!({"ok": false, "msg": "Credenciais inválidas."}));
        let err = prefixed(&stub)
            .login(&Credentials::new("b@c.com", "bad"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Credenciais inválidas.".to_string()));
    }

    #[tokio::test]
    async fn test_blank_form_sends_nothing() {
        let stub = StubTransport::new();
        let gateway = root(&stub);

        let err = gateway.login(&Credentials::new("a@b.com", "")).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        let err = gateway.register(&Registration::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        let err = gateway.add_book(&NewBook::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_is_uniform() {
        let stub = StubTransport::new().fail("connection refused");
        let reply = root(&stub).request(Operation::ListCatalog, Payload::None).await;
        assert!(!reply.ok);
        assert_eq!(reply.status, None);
        assert_eq!(reply.message(), Some(CONNECTION_ERROR));
        assert_eq!(reply.into_result("x"), Err(ApiError::Connection));
    }

    #[tokio::test]
    async fn test_unparseable_error_body() {
        let stub = StubTransport::new().respond_raw(500, "<html>Internal Server Error</html>");
        let reply = root(&stub).request(Operation::Borrow, Payload::None).await;
        assert!(!reply.ok);
        assert_eq!(reply.status, Some(500));
        assert_eq!(reply.message(), Some(UNEXPECTED_ERROR));
    }

    #[tokio::test]
    async fn test_html_page_under_success_status_is_not_a_list() {
        let page = "<!DOCTYPE html><html>index</html>";
        let stub = StubTransport::new()
            .respond_raw(200, page)
            .respond_raw(200, page)
            .respond_raw(200, page);
        let gateway = root(&stub);

        assert_eq!(
            gateway.list_catalog(&CatalogQuery::default()).await,
            Err(ApiError::Connection)
        );
        assert_eq!(gateway.list_my_loans(1).await, Err(ApiError::Connection));
        assert_eq!(gateway.admin_loans().await, Err(ApiError::Connection));
    }

    #[tokio::test]
    async fn test_list_without_envelope() {
        let stub = StubTransport::new().respond(200, json!({"mensagem": "ok"}));
        assert_eq!(
            root(&stub).list_catalog(&CatalogQuery::default()).await,
            Err(ApiError::Connection)
        );
    }

    #[tokio::test]
    async fn test_mutation_accepts_success_without_body() {
        let stub = StubTransport::new().respond_raw(200, "");
        let reply = root(&stub).request(Operation::Borrow, Payload::None).await;
        assert!(reply.ok);
        assert!(!reply.parsed);
        assert_eq!(reply.clone().into_result("x").map(|_| ()), Ok(()));
        assert_eq!(reply.into_payload("x"), Err(ApiError::Connection));
    }

    #[tokio::test]
    async fn test_ok_false_under_success_status() {
        let stub = StubTransport::new().respond(200, json!({"ok": false, "msg": "Erro"}));
        let reply = prefixed(&stub).request(Operation::ListCatalog, Payload::None).await;
        assert!(!reply.ok);
        assert_eq!(
            reply.into_result("fallback"),
            Err(ApiError::Rejected("Erro".to_string()))
        );
    }

    #[tokio::test]
    async fn test_catalog_envelopes() {
        let stub = StubTransport::new()
            .respond(200, json!({"itens": [{"id": 1, "title": "1984", "is_available": 1}]}))
            .respond(200, json!([{"id": 2, "title": "O Hobbit"}]));
        let gateway = root(&stub);
        let books = gateway.list_catalog(&CatalogQuery::default()).await.unwrap();
        assert_eq!(books[0].title, "1984");
        let books = gateway.list_my_loans(3).await.unwrap();
        assert_eq!(books[0].id, 2);

        let sent = stub.requests();
        assert!(sent[0].query.is_empty());
        assert_eq!(sent[1].url, "http://lib.test/meus-emprestimos");
        assert_eq!(sent[1].query_param("idUsuario"), Some("3"));
    }

    #[tokio::test]
    async fn test_prefixed_catalog_search() {
        let stub = StubTransport::new().respond(
            200,
            json!({"ok": true, "books": [{"id": 5, "titulo": "Manual", "autor": "X", "filename": "f.pdf"}]}),
        );
        let gateway = prefixed(&stub);
        let books = gateway
            .list_catalog(&CatalogQuery::search("manual"))
            .await
            .unwrap();
        assert_eq!(books[0].title, "Manual");
        assert_eq!(stub.requests()[0].query_param("q"), Some("manual"));
        assert_eq!(
            gateway.file_url("f.pdf"),
            "http://lib.test/uploads/f.pdf"
        );
    }

    #[tokio::test]
    async fn test_borrow_rejected() {
        let stub = StubTransport::new().respond(409, json!({"ok": false, "mensagem": "Já emprestado"}));
        let err = root(&stub).borrow(1, 7).await.unwrap_err();
        assert_eq!(err.to_string(), "Já emprestado");
        assert_eq!(
            stub.requests()[0].json(),
            Some(&json!({"idUsuario": 1, "idLivro": 7}))
        );
    }

    #[tokio::test]
    async fn test_return_falls_back_to_generic_message() {
        let stub = StubTransport::new().respond(404, json!({}));
        let err = root(&stub).give_back(1, 7).await.unwrap_err();
        assert_eq!(err, ApiError::Rejected("Erro ao devolver.".to_string()));
        assert_eq!(stub.requests()[0].url, "http://lib.test/devolver");
    }

    #[tokio::test]
    async fn test_unsupported_operation_sends_nothing() {
        let stub = StubTransport::new();
        let gateway = prefixed(&stub);
        assert_eq!(
            gateway.borrow(1, 7).await,
            Err(ApiError::Unsupported(Operation::Borrow))
        );
        assert!(!gateway.supports(Operation::AdminLoans));
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_logout_per_flavor() {
        let stub = StubTransport::new();
        root(&stub).logout().await.unwrap();
        assert!(stub.requests().is_empty());

        let stub = StubTransport::new().respond(200, json!({"ok": true, "msg": "Logout realizado."}));
        prefixed(&stub).logout().await.unwrap();
        assert_eq!(stub.requests()[0].url, "http://lib.test/api/logout");
    }

    #[tokio::test]
    async fn test_admin_loans() {
        let stub = StubTransport::new().respond(
            200,
            json!([
                {"id": 2, "title": "1984", "nome_usuario": "Ana", "loan_date": "2024-02-01", "return_date": null},
                {"id": 1, "title": "O Hobbit", "nome_usuario": "Rui", "loan_date": "2024-01-01", "return_date": "2024-01-10"}
            ]),
        );
        let loans = root(&stub).admin_loans().await.unwrap();
        assert_eq!(loans.len(), 2);
        assert_eq!(loans[1].return_date.as_deref(), Some("2024-01-10"));
        assert_eq!(stub.requests()[0].url, "http://lib.test/admin/emprestimos");
    }

    #[tokio::test]
    async fn test_upload_is_multipart() {
        let stub = StubTransport::new().respond(201, json!({"ok": true, "msg": "Arquivo enviado."}));
        let form = Upload {
            titulo: "Livro".to_string(),
            autor: "Eu".to_string(),
            arquivo: Some(UploadFile {
                name: "livro.epub".to_string(),
                bytes: b"epub".to_vec(),
            }),
        };
        prefixed(&stub).upload_book(&form).await.unwrap();

        let sent = stub.requests();
        assert_eq!(sent[0].url, "http://lib.test/api/upload");
        match &sent[0].body {
            Body::Multipart(parts) => assert!(parts.iter().any(|p| matches!(
                p,
                FormPart::File { name, file_name, .. } if name == "arquivo" && file_name == "livro.epub"
            ))),
            other => panic!("expected multipart body, got {other:?}"),
        }
    }
}
