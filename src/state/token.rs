//! Bearer-token persistence in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only client state that survives a reload. It is read
//! once when the session mounts and written or cleared only through
//! `SessionContext` and the bootstrapper.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use crate::config::ClientConfig;

/// Persistent holder of a single bearer token.
///
/// No validation happens here; only the backend decides whether a token is
/// still good.
pub trait TokenStore {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

/// [`TokenStore`] over `window.localStorage`. Inert outside the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.token_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl TokenStore for LocalTokenStore {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(&self.key).ok().flatten()?;
            normalize_token(raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn write(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; token not persisted");
                return;
            };
            if let Err(err) = storage.set_item(&self.key, token) {
                log::warn!("failed to persist token: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// Blank values count as "no token".
pub(crate) fn normalize_token(raw: String) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
