//! Process configuration, read from the environment (and `.env` via dotenvy).

use actix_web::cookie::Key;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_STATIC_DIR: &str = "./static";
const DEFAULT_MAX_CONNECTIONS: u32 = 8;
const MIN_SESSION_KEY_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Absent means the in-memory gateway is used.
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub session_key: Option<String>,
    pub static_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {e}");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let max_connections = match non_empty("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Invalid DATABASE_MAX_CONNECTIONS '{raw}', using {DEFAULT_MAX_CONNECTIONS}");
                DEFAULT_MAX_CONNECTIONS
            }),
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            database_url: non_empty("DATABASE_URL"),
            max_connections,
            session_key: lookup("SESSION_KEY"),
            static_dir: non_empty("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        }
    }

    /// Cookie signing key. A missing or short SESSION_KEY falls back to a
    /// random key, which logs everyone out on restart.
    pub fn session_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {}+), generating random key",
                    val.len(),
                    MIN_SESSION_KEY_LEN
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}
