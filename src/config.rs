use std::time::Duration;

use serde::Deserialize;

const DEFAULT_AGIFY_URL: &str = "https://api.agify.io";
const DEFAULT_GENDERIZE_URL: &str = "https://api.genderize.io";
const DEFAULT_NATIONALIZE_URL: &str = "https://api.nationalize.io";

/// Variables that must all be present before the service will start.
pub const REQUIRED_VARS: [&str; 6] = [
    "POSTGRES_USER",
    "POSTGRES_PASSWORD",
    "POSTGRES_DB",
    "POSTGRES_HOST",
    "POSTGRES_PORT",
    "SERVER_HOST",
];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub db_username: String,
    pub db_password: String,
    pub db_name: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_max_connections: u32,
    /// Bind address as `host:port`; the host may be a name such as `localhost`.
    pub server_addr: String,
    pub agify_url: String,
    pub genderize_url: String,
    pub nationalize_url: String,
    pub enrichment_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parses the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|&key| lookup(key).map_or(true, |v| v.trim().is_empty()))
            .collect();
        if !missing.is_empty() {
            anyhow::bail!("Missing environment variables: {}", missing.join(", "));
        }

        let required = |key: &str| lookup(key).unwrap_or_default().trim().to_string();

        let config = Self {
            db_username: required("POSTGRES_USER"),
            db_password: required("POSTGRES_PASSWORD"),
            db_name: required("POSTGRES_DB"),
            db_host: required("POSTGRES_HOST"),
            db_port: required("POSTGRES_PORT").parse().map_err(|_| {
                anyhow::anyhow!("POSTGRES_PORT must be a valid number between 1-65535")
            })?,
            server_addr: bind_address(&required("SERVER_HOST"))?,
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("DB_MAX_CONNECTIONS must be a positive number"))?,
            agify_url: base_url(&lookup, "AGIFY_URL", DEFAULT_AGIFY_URL)?,
            genderize_url: base_url(&lookup, "GENDERIZE_URL", DEFAULT_GENDERIZE_URL)?,
            nationalize_url: base_url(&lookup, "NATIONALIZE_URL", DEFAULT_NATIONALIZE_URL)?,
            enrichment_timeout: lookup("ENRICHMENT_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| {
                    anyhow::anyhow!("ENRICHMENT_TIMEOUT_SECS must be a number of seconds")
                })?,
        };

        // Never echo the password
        tracing::debug!(
            "Database: {}@{}:{}/{}",
            config.db_username,
            config.db_host,
            config.db_port,
            config.db_name
        );
        tracing::debug!("Server address: {}", config.server_addr);

        Ok(config)
    }
}

fn bind_address(raw: &str) -> anyhow::Result<String> {
    let valid = raw
        .rsplit_once(':')
        .map(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok())
        .unwrap_or(false);
    if !valid {
        anyhow::bail!("SERVER_HOST must be host:port, such as localhost:8080");
    }
    Ok(raw.to_string())
}

fn base_url<F>(lookup: &F, key: &str, default: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string());
    let parsed = url::Url::parse(raw.trim())
        .map_err(|e| anyhow::anyhow!("{} is not a valid URL: {}", key, e))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("{} must start with http:// or https://", key);
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}
