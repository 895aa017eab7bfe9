//! The gateway HTTP client: one configured `reqwest::Client`, the current
//! bearer token, and the global unauthorized hook.
//!
//! Every request goes through [`ApiClient::get_json`] / [`ApiClient::post_json`],
//! so bearer injection and error mapping happen in exactly one place. A 401
//! response fires the unauthorized hook once per occurrence (the session
//! layer uses it to clear stored credentials and bounce to the login route)
//! and still reaches the caller as an ordinary [`ApiError`] value — no error
//! here is fatal and nothing is retried at this layer.

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use store::FinancioConfig;

/// Error taxonomy for gateway requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The gateway answered with a non-success status.
    #[error("{message} (status {status})")]
    Http { status: u16, message: String },
    /// Transport failure or client-side timeout.
    #[error("network error: {0}")]
    Network(String),
    /// The gateway answered 2xx but the payload did not decode.
    #[error("bad response payload: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Duplicate-resource responses are benign for idempotent-ish creates.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}

type UnauthorizedHook = Box<dyn Fn()>;

/// Shared, cheaply clonable gateway client. All handles see the same token
/// and the same unauthorized hook.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<Mutex<Option<String>>>,
    on_unauthorized: Arc<Mutex<Option<UnauthorizedHook>>>,
}

impl ApiClient {
    pub fn new(config: &FinancioConfig) -> Self {
        Self {
            http: build_http(config.gateway.timeout_secs),
            base_url: config.gateway.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(Mutex::new(None)),
            on_unauthorized: Arc::new(Mutex::new(None)),
        }
    }

    /// Swap the bearer token attached to subsequent requests. `None` removes
    /// the Authorization header entirely.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }

    /// Install the handler run on every 401 response.
    pub fn set_unauthorized_hook(&self, hook: impl Fn() + 'static) {
        *self.on_unauthorized.lock().unwrap() = Some(Box::new(hook));
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.lock().unwrap().clone() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.http.get(self.url(path)).query(query));
        self.execute(request).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.http.post(self.url(path)).query(query).json(body));
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("gateway request failed: {e}");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Map a non-success status to an [`ApiError`], firing the unauthorized
    /// hook when the status is 401. Called once per offending response.
    pub(crate) fn error_for_status(&self, status: u16, body: &str) -> ApiError {
        if status == 401 {
            if let Some(hook) = self.on_unauthorized.lock().unwrap().as_ref() {
                hook();
            }
        }
        let message = extract_message(body);
        tracing::error!(status, "gateway error: {message}");
        ApiError::Http { status, message }
    }
}

fn build_http(timeout_secs: u64) -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("falling back to default http client: {e}");
                reqwest::Client::new()
            })
    }
    // The browser's fetch has no per-request timeout knob in reqwest's wasm
    // backend; the gateway-side limit applies there.
    #[cfg(target_arch = "wasm32")]
    {
        let _ = timeout_secs;
        reqwest::Client::new()
    }
}

/// Pull a human-readable message out of a gateway error body. FastAPI-style
/// gateways answer `{"detail": "..."}`; anything else is used verbatim.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["detail", "message", "error"] {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    if body.trim().is_empty() {
        "request failed".to_string()
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn client() -> ApiClient {
        ApiClient::new(&FinancioConfig::default())
    }

    #[test]
    fn base_url_loses_its_trailing_slash() {
        let mut config = FinancioConfig::default();
        config.gateway.base_url = "https://api.example.com/".to_string();
        let client = ApiClient::new(&config);
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.url("/api/v1/users/me"), "https://api.example.com/api/v1/users/me");
    }

    #[test]
    fn unauthorized_hook_fires_once_per_401() {
        let client = client();
        let fired = Rc::new(Cell::new(0u32));
        let counter = fired.clone();
        client.set_unauthorized_hook(move || counter.set(counter.get() + 1));

        let err = client.error_for_status(401, r#"{"detail": "expired token"}"#);
        assert_eq!(err.status(), Some(401));
        assert_eq!(fired.get(), 1);

        // other failures leave the hook alone
        let err = client.error_for_status(500, "boom");
        assert_eq!(err.status(), Some(500));
        assert_eq!(fired.get(), 1);

        // a second 401 is a second occurrence
        client.error_for_status(401, "");
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn unauthorized_hook_can_clear_the_stored_session() {
        use store::{MemoryStore, SessionStore, StoredSession};

        let sessions = std::rc::Rc::new(MemoryStore::new());
        sessions.save(&StoredSession {
            token: "stale".to_string(),
            user_id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
        });

        let client = client();
        let hook_store = sessions.clone();
        client.set_unauthorized_hook(move || hook_store.clear());

        client.error_for_status(401, "");
        assert!(sessions.load().is_none());
    }

    #[test]
    fn extract_message_prefers_detail_field() {
        assert_eq!(extract_message(r#"{"detail": "User not found"}"#), "User not found");
        assert_eq!(extract_message(r#"{"message": "nope"}"#), "nope");
        assert_eq!(extract_message("plain text"), "plain text");
        assert_eq!(extract_message(""), "request failed");
    }

    #[test]
    fn conflict_detection() {
        let conflict = ApiError::Http {
            status: 409,
            message: "User already exists".to_string(),
        };
        assert!(conflict.is_conflict());
        assert!(!ApiError::Network("timeout".to_string()).is_conflict());
    }
}
