//! HTTP server: shared state, routes and the listener loop.
//!
//! | Method | Path                    | Handler              |
//! |--------|-------------------------|----------------------|
//! | GET    | `/api/report`           | [`handlers::report`] |
//! | GET    | `/api/me`               | [`handlers::me`]     |
//! | GET    | `/auth/github/login`    | [`auth::login`]      |
//! | GET    | `/auth/github/callback` | [`auth::callback`]   |
//! | GET    | `/auth/logout`          | [`auth::logout`]     |
//!
//! Every route is wrapped by the [`cors`] middleware.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Router};
use pr_report_core::{Config, Error, Result};
use pr_report_github::{Credentials, GitHubClient, OAuthApp};
use pr_report_storage::SessionStore;

use crate::cors::{cors, CorsOrigin};
use crate::{auth, handlers};

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<dyn SessionStore>,
    pub oauth: Arc<OAuthApp>,
    cors_origin: CorsOrigin,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// Fails when the OAuth app credentials are missing or the frontend URL
    /// can't be used as a CORS origin.
    pub fn new(config: Config, sessions: Arc<dyn SessionStore>) -> Result<Self> {
        let (client_id, client_secret) = config.require_oauth_app()?;
        let oauth = OAuthApp::with_base_url(
            config.github.oauth_url.clone(),
            client_id,
            client_secret,
            config.server.oauth_redirect_url(),
        );
        let cors_origin = CorsOrigin::new(&config.server.frontend_url)?;

        Ok(Self {
            config: Arc::new(config),
            sessions,
            oauth: Arc::new(oauth),
            cors_origin,
        })
    }

    /// GitHub client for the given credentials against the configured API.
    pub fn github_client(&self, credentials: Credentials) -> GitHubClient {
        GitHubClient::with_base_url(self.config.github.api_url.clone(), credentials)
    }

    /// Where the browser goes after login and logout.
    pub fn frontend_url(&self) -> &str {
        &self.config.server.frontend_url
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors_origin = state.cors_origin.clone();

    Router::new()
        .route("/api/report", get(handlers::report))
        .route("/api/me", get(handlers::me))
        .route("/auth/github/login", get(auth::login))
        .route("/auth/github/callback", get(auth::callback))
        .route("/auth/logout", get(auth::logout))
        .layer(middleware::from_fn_with_state(cors_origin, cors))
        .with_state(state)
}

/// Listen on `port` on all interfaces and serve until the process is stopped.
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Http(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(
        frontend = %state.frontend_url(),
        api = %state.config.github.api_url,
        "Server starting on :{}",
        port
    );

    axum::serve(listener, router(state))
        .await
        .map_err(|e| Error::Http(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}
