use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};

/// Scripted Transport for tests.
///
/// Responses are returned in the order they were queued; every request is
/// recorded so tests can assert on what was (or was not) sent. Clones share
/// the same script and log.
#[derive(Clone, Debug, Default)]
pub struct StubTransport {
    script: Arc<Mutex<VecDeque<Result<HttpResponse, String>>>>,
    log: Arc<Mutex<Vec<HttpRequest>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn respond(self, status: u16, body: Value) -> Self {
        self.respond_raw(status, &body.to_string())
    }

    /// Queue a response with an arbitrary body.
    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    /// Queue a network failure.
    pub fn fail(self, reason: &str) -> Self {
        self.push(Err(reason.to_string()));
        self
    }

    /// Requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    fn push(&self, entry: Result<HttpResponse, String>) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(entry);
        }
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if let Ok(mut log) = self.log.lock() {
            log.push(request);
        }
        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front());
        match next {
            Some(Ok(response)) => Ok(response),
            Some(Err(reason)) => Err(TransportError::Request(reason)),
            None => Err(TransportError::Request("no scripted response".to_string())),
        }
    }
}
