use anyhow::Context;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// MySQL URL. Unset means the in-memory store.
    pub database_url: Option<String>,
    pub api_prefix: String,

    // Rate limiting, 0 disables
    pub rate_limit_per_min: u32,

    /// Browser origins allowed to call the API. `*` allows any.
    pub allowed_origins: Vec<String>,

    pub log_dir: String,
    pub log_level: tracing::Level,

    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server_addr: text("SERVER_ADDR", "127.0.0.1:5000"),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            api_prefix: text("API_PREFIX", "/api"),
            rate_limit_per_min: parsed(&lookup, "RATE_LIMIT_PER_MIN", 1000)?,
            allowed_origins: text("ALLOWED_ORIGINS", "*")
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            log_dir: text("LOG_DIR", "logs"),
            log_level: parsed(&lookup, "LOG_LEVEL", tracing::Level::DEBUG)?,
            seed_demo_data: parsed(&lookup, "SEED_DEMO_DATA", false)?,
        })
    }
}

fn parsed<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: '{}'", key, raw)),
        None => Ok(default),
    }
}
