//! Server configuration from the environment
//!
//! `.env` is loaded by `main` before [`AppConfig::from_env`] runs.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, bail, ensure};
use auth::AuthConfig;
use axum::http::HeaderValue;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// CORS allow-list
    pub frontend_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {v}"))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be host:port")?;

        let frontend_origins = parse_origins(
            &env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string()),
        )
        .context("FRONTEND_ORIGINS")?;

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth: auth_config_from_env()?,
        })
    }
}

fn auth_config_from_env() -> anyhow::Result<AuthConfig> {
    let base = match env::var("AUTH_SESSION_SECRET") {
        Ok(secret_b64) => AuthConfig {
            session_secret: decode_secret(&secret_b64)?,
            ..AuthConfig::default()
        },
        // Sessions do not survive a restart with a random secret
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("AUTH_SESSION_SECRET not set; using a random secret");
            AuthConfig::development()
        }
        Err(_) => bail!("AUTH_SESSION_SECRET must be set in production"),
    };

    let cookie_secure = match env::var("AUTH_COOKIE_SECURE") {
        Ok(v) => parse_bool(&v).with_context(|| format!("AUTH_COOKIE_SECURE: {v}"))?,
        Err(_) => !cfg!(debug_assertions),
    };

    let password_pepper = env::var("AUTH_PASSWORD_PEPPER")
        .ok()
        .filter(|p| !p.is_empty())
        .map(String::into_bytes);

    Ok(AuthConfig {
        cookie_secure,
        password_pepper,
        ..base
    })
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("AUTH_SESSION_SECRET is not valid base64")?;
    ensure!(
        bytes.len() == 32,
        "AUTH_SESSION_SECRET must decode to 32 bytes (got {})",
        bytes.len()
    );

    let mut secret = [0u8; 32];
    secret.copy_from_slice(&bytes);
    Ok(secret)
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}

/// Credentialed CORS cannot use a wildcard origin
fn parse_origins(value: &str) -> anyhow::Result<Vec<HeaderValue>> {
    let mut origins = Vec::new();
    for origin in value.split(',').map(str::trim).filter(|o| !o.is_empty()) {
        if origin == "*" {
            bail!("wildcard origin is not allowed with credentials; list origins explicitly");
        }
        match origin.parse() {
            Ok(header) => origins.push(header),
            Err(_) => tracing::warn!(origin, "Ignoring unparsable CORS origin"),
        }
    }
    Ok(origins)
}
