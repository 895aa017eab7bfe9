//! Client side of the external identity provider. The provider itself is an
//! external collaborator; this module only wraps its two token endpoints
//! and hands back the session material the rest of the app persists.

use serde::{Deserialize, Serialize};
use store::FinancioConfig;

use crate::client::ApiError;

/// What the provider hands back after a successful sign-in or sign-up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdentitySession {
    pub user_id: String,
    /// Bearer token for the gateway.
    pub id_token: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Thin client for the identity provider's account endpoints.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdentityClient {
    pub fn new(config: &FinancioConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.identity.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<IdentitySession, ApiError> {
        self.post_session("/v1/accounts/sign-in", &SignInBody { email, password })
            .await
    }

    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<IdentitySession, ApiError> {
        self.post_session(
            "/v1/accounts/sign-up",
            &SignUpBody {
                name,
                email,
                password,
            },
        )
        .await
    }

    async fn post_session<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<IdentitySession, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(&url).json(body).send().await.map_err(|e| {
            tracing::error!("identity request failed: {e}");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let message = match response.text().await {
                Ok(body) if !body.trim().is_empty() => body.trim().to_string(),
                _ => "authentication failed".to_string(),
            };
            tracing::error!(status, "identity provider error: {message}");
            return Err(ApiError::Http { status, message });
        }

        response
            .json::<IdentitySession>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_session_tolerates_sparse_providers() {
        let raw = r#"{"user_id": "u1", "id_token": "tok"}"#;
        let session: IdentitySession = serde_json::from_str(raw).unwrap();
        assert_eq!(session.user_id, "u1");
        assert_eq!(session.id_token, "tok");
        assert_eq!(session.display_name, "");
        assert_eq!(session.email, "");
    }
}
