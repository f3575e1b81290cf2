//! Configuration management for pr-report.
//!
//! Values are resolved in three layers, later layers winning:
//!
//! 1. Built-in defaults
//! 2. Optional TOML file in the platform config directory
//!    (`~/.config/pr-report/config.toml` on Linux)
//! 3. Environment variables, with `.env` in the working directory filling
//!    in unset ones for `pr-report serve`
//!
//! | Variable               | Field                   | Default                  |
//! |------------------------|-------------------------|--------------------------|
//! | `GITHUB_CLIENT_ID`     | `github.client_id`      | none                     |
//! | `GITHUB_CLIENT_SECRET` | `github.client_secret`  | none                     |
//! | `GITHUB_API_URL`       | `github.api_url`        | `https://api.github.com` |
//! | `GITHUB_OAUTH_URL`     | `github.oauth_url`      | `https://github.com`     |
//! | `FRONTEND_URL`         | `server.frontend_url`   | `http://localhost:5173`  |
//! | `API_PORT`             | `server.port`           | `7733`                   |
//! | `OAUTH_REDIRECT_URL`   | `server.redirect_url`   | `{frontend_url}/auth/github/callback` |
//!
//! # Example
//!
//! ```ignore
//! use pr_report_core::config::Config;
//!
//! let config = Config::load()?;
//! println!("listening on {}", config.server.port);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Config directory name.
const CONFIG_DIR_NAME: &str = "pr-report";

/// Default GitHub REST API URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default GitHub OAuth host.
pub const DEFAULT_OAUTH_URL: &str = "https://github.com";

/// Default frontend origin.
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Default API port.
pub const DEFAULT_PORT: u16 = 7733;

/// Dotenv file read by the server from its working directory.
pub const ENV_FILE: &str = ".env";

// =============================================================================
// Configuration structures
// =============================================================================

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API and OAuth app settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// HTTP service settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// GitHub configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// REST API base URL (for GitHub Enterprise)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Host serving `/login/oauth/*`
    #[serde(default = "default_oauth_url")]
    pub oauth_url: String,
    /// OAuth app client ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// OAuth app client secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

/// HTTP service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Frontend origin: CORS allow-origin and post-login redirect target
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
    /// OAuth callback URL registered with the GitHub app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_oauth_url() -> String {
    DEFAULT_OAUTH_URL.to_string()
}

fn default_frontend_url() -> String {
    DEFAULT_FRONTEND_URL.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            oauth_url: default_oauth_url(),
            client_id: None,
            client_secret: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            frontend_url: default_frontend_url(),
            redirect_url: None,
        }
    }
}

impl ServerConfig {
    /// OAuth callback URL, derived from the frontend URL unless set explicitly.
    pub fn oauth_redirect_url(&self) -> String {
        self.redirect_url.clone().unwrap_or_else(|| {
            format!(
                "{}/auth/github/callback",
                self.frontend_url.trim_end_matches('/')
            )
        })
    }
}

// =============================================================================
// Config implementation
// =============================================================================

impl Config {
    /// Get the configuration directory path.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(CONFIG_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default file location and the process environment.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_default_file()?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Like [`Config::load`], with `env_file` supplying variables that the
    /// process environment leaves unset.
    pub fn load_with_env_file(env_file: &Path) -> Result<Self> {
        let file_vars = read_env_file(env_file)?;
        let mut config = Self::load_default_file()?;
        config.apply_env(layered_lookup(|key| std::env::var(key).ok(), &file_vars))?;
        Ok(config)
    }

    fn load_default_file() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                debug!(error = %e, "No config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    ///
    /// Returns a default config if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let Some(contents) = read_config_file(path)? else {
            return Ok(Self::default());
        };

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;

        info!(path = ?path, "Config loaded successfully");
        Ok(config)
    }

    /// Override values from environment variables.
    ///
    /// `lookup` returns the value of a variable, or `None` when unset.
    /// Empty values count as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.github.apply_env(&lookup);
        self.server.apply_env(&lookup)
    }

    /// Check that the OAuth app credentials needed by the server are present.
    pub fn require_oauth_app(&self) -> Result<(&str, &str)> {
        match (&self.github.client_id, &self.github.client_secret) {
            (Some(id), Some(secret)) => Ok((id, secret)),
            _ => Err(Error::Config(
                "GITHUB_CLIENT_ID and GITHUB_CLIENT_SECRET must be set".to_string(),
            )),
        }
    }
}

/// The `[github]` table alone; other tables are skipped unparsed.
#[derive(Debug, Default, Deserialize)]
struct GitHubSection {
    #[serde(default)]
    github: GitHubConfig,
}

impl GitHubConfig {
    /// Load only the GitHub settings from the default file and the process
    /// environment.
    ///
    /// `[server]` values and server variables such as `API_PORT` are never
    /// read, so a broken server setting can't fail a one-shot report.
    pub fn load() -> Result<Self> {
        let mut github = match Config::config_path() {
            Ok(path) => Self::load_from(&path)?,
            Err(e) => {
                debug!(error = %e, "No config directory, using defaults");
                Self::default()
            }
        };
        github.apply_env(|key| std::env::var(key).ok());
        Ok(github)
    }

    /// Load the `[github]` table of a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let Some(contents) = read_config_file(path)? else {
            return Ok(Self::default());
        };

        let section: GitHubSection = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;
        Ok(section.github)
    }

    /// Override GitHub values from environment variables.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(v) = var("GITHUB_CLIENT_ID") {
            self.client_id = Some(v);
        }
        if let Some(v) = var("GITHUB_CLIENT_SECRET") {
            self.client_secret = Some(v);
        }
        if let Some(v) = var("GITHUB_API_URL") {
            self.api_url = v;
        }
        if let Some(v) = var("GITHUB_OAUTH_URL") {
            self.oauth_url = v;
        }
    }
}

impl ServerConfig {
    /// Override server values from environment variables.
    ///
    /// An unparsable `API_PORT` is an error.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(v) = var("FRONTEND_URL") {
            self.frontend_url = v;
        }
        if let Some(v) = var("OAUTH_REDIRECT_URL") {
            self.redirect_url = Some(v);
        }
        if let Some(v) = var("API_PORT") {
            self.port = v
                .parse()
                .map_err(|e| Error::Config(format!("Invalid API_PORT '{}': {}", v, e)))?;
        }

        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        debug!(path = ?path, "Config file does not exist, using defaults");
        return Ok(None);
    }

    debug!(path = ?path, "Loading config");
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))
}

// =============================================================================
// .env file
// =============================================================================

/// Read `KEY=value` pairs from a dotenv file without touching the process
/// environment.
///
/// A missing file yields no variables.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        debug!(path = ?path, "No .env file found");
        return Ok(HashMap::new());
    }

    let vars = dotenvy::from_path_iter(path)
        .and_then(|iter| iter.collect::<std::result::Result<HashMap<_, _>, _>>())
        .map_err(|e| Error::Config(format!("Failed to load {}: {}", path.display(), e)))?;

    info!(path = ?path, count = vars.len(), "Loaded .env file");
    Ok(vars)
}

/// Lookup that asks `primary` first and falls back to `fallback`.
fn layered_lookup<'a, F>(
    primary: F,
    fallback: &'a HashMap<String, String>,
) -> impl Fn(&str) -> Option<String> + 'a
where
    F: Fn(&str) -> Option<String> + 'a,
{
    move |key| {
        primary(key)
            .filter(|v| !v.is_empty())
            .or_else(|| fallback.get(key).cloned())
    }
}

// =============================================================================
// Tests
// =============================================================================
