use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use crate::config::ApiConfig;
use crate::net::api::{HttpRequest, HttpResponse};
use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::state::storage::MemoryStorage;

/// Transport answering by endpoint path.
#[derive(Clone, Default)]
struct RoutedTransport {
    routes: HashMap<&'static str, (u16, &'static str)>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl RoutedTransport {
    fn route(mut self, endpoint: &'static str, status: u16, body: &'static str) -> Self {
        self.routes.insert(endpoint, (status, body));
        self
    }
}

impl Transport for RoutedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let endpoint = request.url.trim_start_matches("http://localhost:8000/api");
        let (status, body) = self.routes.get(endpoint).copied().unwrap_or((404, r#"{"detail":"Not Found"}"#));
        self.sent.lock().unwrap().push(request);
        Ok(HttpResponse {
            status,
            status_text: String::new(),
            body: body.to_owned(),
        })
    }
}

fn client(transport: RoutedTransport) -> ApiClient<MemoryStorage, RoutedTransport> {
    ApiClient::new(ApiConfig::default(), SessionStore::new(MemoryStorage::new()), transport)
}

#[test]
fn sign_in_stores_token_and_profile() {
    let transport = RoutedTransport::default()
        .route("/login", 200, r#"{"access_token":"tok-9","token_type":"bearer"}"#)
        .route("/me", 200, r#"{"id":1,"username":"ada","email":"ada@example.com","role":"admin"}"#);
    let api = client(transport.clone());

    let user = block_on(sign_in(&api, "ada@example.com", "pw")).unwrap();

    assert_eq!(user.username, "ada");
    assert_eq!(api.session().token().as_deref(), Some("tok-9"));
    assert_eq!(api.session().user().map(|u| u.role), Some(Role::Admin));

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent[0].body.as_deref(), Some(r#"{"email":"ada@example.com","password":"pw"}"#));
    assert_eq!(sent[1].header("Authorization"), Some("Bearer tok-9"));
}

#[test]
fn rejected_credentials_report_detail_without_expiry() {
    let transport = RoutedTransport::default().route("/login", 401, r#"{"detail":"Invalid credentials"}"#);
    let expired = Arc::new(AtomicUsize::new(0));
    let counter = expired.clone();
    let api = client(transport.clone()).on_session_expired(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let err = block_on(sign_in(&api, "ada@example.com", "wrong")).unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(!api.session().is_logged_in());
    assert_eq!(expired.load(Ordering::SeqCst), 0);
    assert_eq!(transport.sent.lock().unwrap()[0].header("Authorization"), None);
}

#[test]
fn suspended_account_reports_detail() {
    let transport = RoutedTransport::default().route("/login", 403, r#"{"detail":"Account suspended"}"#);
    let api = client(transport);

    let err = block_on(sign_in(&api, "ada@example.com", "pw")).unwrap_err();

    assert_eq!(err.to_string(), "Account suspended");
}

#[test]
fn profile_failure_rolls_back_token() {
    let transport = RoutedTransport::default()
        .route("/login", 200, r#"{"access_token":"tok-9"}"#)
        .route("/me", 500, "");
    let api = client(transport);

    let err = block_on(sign_in(&api, "ada@example.com", "pw")).unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(!api.session().is_logged_in());
}
