use serde::Deserialize;
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            database: DatabaseConfig {
                url: normalize_database_url(env::var("DATABASE_URL").ok()),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
            },
        })
    }

    /// Config pointing at a private in-memory SQLite database.
    pub fn in_memory() -> Self {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                // each pooled connection would see its own empty memory db
                max_connections: 1,
            },
        }
    }
}

/// Heroku-style `postgres://` urls are rewritten to `postgresql://`; no url
/// falls back to a file-backed SQLite database.
fn normalize_database_url(url: Option<String>) -> String {
    match url {
        Some(url) if !url.trim().is_empty() => {
            if let Some(rest) = url.strip_prefix("postgres://") {
                format!("postgresql://{}", rest)
            } else {
                url
            }
        }
        _ => DEFAULT_DATABASE_URL.to_string(),
    }
}
