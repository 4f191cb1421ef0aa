//! Cookie session helpers: flash messages and the CSRF token.

use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::Key;
use rand::Rng;

use crate::errors::AppError;

const CSRF_KEY: &str = "csrf_token";
const FLASH_KEY: &str = "flash";

pub fn middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("decks_session".to_string())
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// The session's CSRF token, created on first use.
pub fn csrf_token(session: &Session) -> String {
    if let Ok(Some(token)) = session.get::<String>(CSRF_KEY) {
        return token;
    }
    let bytes: [u8; 32] = rand::rng().random();
    let token = hex::encode(bytes);
    if let Err(e) = session.insert(CSRF_KEY, &token) {
        log::warn!("Could not store CSRF token in session: {e}");
    }
    token
}

pub fn verify_csrf(session: &Session, submitted: &str) -> Result<(), AppError> {
    let stored = session
        .get::<String>(CSRF_KEY)
        .map_err(|e| AppError::Session(e.to_string()))?
        .unwrap_or_default();
    if stored.is_empty() || !constant_time_eq(stored.as_bytes(), submitted.as_bytes()) {
        return Err(AppError::Csrf);
    }
    Ok(())
}

pub fn flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH_KEY, message) {
        log::warn!("Could not store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let message = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if message.is_some() {
        session.remove(FLASH_KEY);
    }
    message
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
