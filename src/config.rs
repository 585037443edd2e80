use std::env;

/// Process configuration, read once at startup.
///
/// `HOST` and `PORT` come from the environment (or a `.env` file); everything
/// else in this system is in-memory and needs no configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        Self { host, port }
    }
}
