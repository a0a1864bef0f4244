use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON product seed. The built-in demo catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub concurrency_limit: usize,
    pub body_limit_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let catalog_path = env::var("CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let concurrency_limit = env::var("APP_CONCURRENCY_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(100);
        let body_limit_bytes = env::var("APP_BODY_LIMIT_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(1024 * 1024);
        Ok(Self {
            host,
            port,
            catalog_path,
            concurrency_limit,
            body_limit_bytes,
        })
    }
}
