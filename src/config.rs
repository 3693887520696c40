//! Client configuration baked in at build time.
//!
//! DESIGN
//! ======
//! A WASM bundle has no process environment at runtime, so values are read
//! with `option_env!` when the crate is compiled. `from_values` holds the
//! parsing so it can be exercised without touching the build environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5500";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_MAX_PICTURE_BYTES: u64 = 5 * 1024 * 1024;

/// Errors produced while parsing client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The API base URL is not an absolute http(s) URL.
    #[error("invalid QA_API_BASE_URL '{0}': expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    /// The token storage key is blank.
    #[error("QA_TOKEN_KEY must not be empty")]
    EmptyTokenKey,

    /// The picture size limit is not a positive integer.
    #[error("invalid QA_MAX_PICTURE_BYTES '{0}'")]
    InvalidPictureLimit(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash (e.g. `http://localhost:5500`).
    pub api_base_url: String,
    /// `localStorage` key holding the bearer token.
    pub token_key: String,
    /// Largest profile picture accepted before upload.
    pub max_picture_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            max_picture_bytes: DEFAULT_MAX_PICTURE_BYTES,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `QA_API_BASE_URL`: default `http://localhost:5500`
    /// - `QA_TOKEN_KEY`: default `token`
    /// - `QA_MAX_PICTURE_BYTES`: default 5 MiB
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any provided value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("QA_API_BASE_URL"),
            option_env!("QA_TOKEN_KEY"),
            option_env!("QA_MAX_PICTURE_BYTES"),
        )
    }

    /// Build config from raw optional values, applying defaults for `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any provided value fails to parse.
    pub fn from_values(
        api_base_url: Option<&str>,
        token_key: Option<&str>,
        max_picture_bytes: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(api_base_url.unwrap_or(DEFAULT_API_BASE_URL))?;
        let token_key = parse_token_key(token_key.unwrap_or(DEFAULT_TOKEN_KEY))?;
        let max_picture_bytes = match max_picture_bytes {
            Some(raw) => parse_picture_limit(raw)?,
            None => DEFAULT_MAX_PICTURE_BYTES,
        };
        Ok(Self { api_base_url, token_key, max_picture_bytes })
    }

    /// Absolute URL for an API path such as `/user/check`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    /// Absolute URL for a server-relative asset path returned by the API.
    ///
    /// Values that are already absolute pass through untouched.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_owned()
        } else {
            self.endpoint(path)
        }
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::InvalidBaseUrl(raw.to_owned()))?;
    if host.is_empty() {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn parse_token_key(raw: &str) -> Result<String, ConfigError> {
    let key = raw.trim();
    if key.is_empty() {
        return Err(ConfigError::EmptyTokenKey);
    }
    Ok(key.to_owned())
}

fn parse_picture_limit(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(bytes) if bytes > 0 => Ok(bytes),
        _ => Err(ConfigError::InvalidPictureLimit(raw.to_owned())),
    }
}
