//! GitHub OAuth app: authorize URL and code-for-token exchange.

use pr_report_core::{Error, Result};
use reqwest::Url;
use tracing::{debug, warn};

use crate::types::{AccessTokenRequest, AccessTokenResponse};
use crate::USER_AGENT;

/// Scopes requested at login.
pub const OAUTH_SCOPES: &[&str] = &["read:user", "user:email"];

/// GitHub OAuth app credentials and endpoints.
#[derive(Debug, Clone)]
pub struct OAuthApp {
    oauth_url: String,
    client_id: String,
    client_secret: String,
    redirect_url: String,
    client: reqwest::Client,
}

impl OAuthApp {
    /// Create an OAuth app served by `oauth_url` (`https://github.com` for github.com).
    pub fn with_base_url(
        oauth_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            oauth_url: oauth_url.into().trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_url: redirect_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// URL the browser is sent to for consent.
    pub fn authorize_url(&self, state: &str) -> Result<Url> {
        let scope = OAUTH_SCOPES.join(" ");
        Url::parse_with_params(
            &format!("{}/login/oauth/authorize", self.oauth_url),
            &[
                ("access_type", "offline"),
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_url.as_str()),
                ("response_type", "code"),
                ("scope", scope.as_str()),
                ("state", state),
            ],
        )
        .map_err(|e| Error::Config(format!("Invalid OAuth URL: {}", e)))
    }

    /// Exchange an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<String> {
        let url = format!("{}/login/oauth/access_token", self.oauth_url);
        debug!(url = url, "GitHub OAuth token exchange");

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .form(&AccessTokenRequest {
                client_id: &self.client_id,
                client_secret: &self.client_secret,
                code,
                redirect_uri: &self.redirect_url,
            })
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "GitHub OAuth exchange failed");
            return Err(Error::from_status(status.as_u16(), message));
        }

        let body: AccessTokenResponse = response
            .json()
            .await
            .map_err(|e| Error::InvalidData(format!("Failed to parse token response: {}", e)))?;

        match (body.access_token, body.error) {
            (Some(token), None) if !token.is_empty() => Ok(token),
            (_, Some(error)) => Err(Error::Unauthorized(format!(
                "{}: {}",
                error,
                body.error_description.unwrap_or_default()
            ))),
            _ => Err(Error::Unauthorized(
                "Token response did not contain an access token".to_string(),
            )),
        }
    }
}
