//! REST API client for the Q&A backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, each carrying
//! `Authorization: Bearer <token>`.
//! Native builds (tests): every call returns [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; nothing panics, so callers pick
//! the severity (redirect, log, or toast) at the call site.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{BaseUser, LoginRequest, RegisterRequest};
use super::upload::PictureFile;
use crate::config::ClientConfig;

pub const CHECK_PATH: &str = "/user/check";
pub const PROFILE_PICTURE_PATH: &str = "/user/profile-picture";
pub const UPLOAD_PICTURE_PATH: &str = "/user/upload-profile-picture";
pub const REMOVE_PICTURE_PATH: &str = "/user/remove-profile-picture";
pub const LOGIN_PATH: &str = "/user/login";
pub const REGISTER_PATH: &str = "/user/register";

/// Multipart field name the backend reads the picture from.
pub const PICTURE_FIELD: &str = "profilePicture";

// =============================================================================
// TRAITS
// =============================================================================

/// Calls needed to resolve the session. Enables fakes in tests.
#[async_trait::async_trait(?Send)]
pub trait SessionApi {
    /// Validate `token` and return the user it belongs to.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; the session treats all of them as an auth failure.
    async fn check_user(&self, token: &str) -> Result<BaseUser, ApiError>;

    /// Look up the current picture path, `None` when the user has none.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; callers treat this lookup as best-effort.
    async fn fetch_profile_picture(&self, token: &str) -> Result<Option<String>, ApiError>;
}

/// Picture mutations used by the profile page.
#[async_trait::async_trait(?Send)]
pub trait PictureApi: SessionApi {
    /// Upload `file` as multipart field [`PICTURE_FIELD`] and return the new URL.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; `Status` may carry a server message for the user.
    async fn upload_profile_picture(&self, token: &str, file: &PictureFile) -> Result<String, ApiError>;

    /// Delete the current picture. Succeeds when there is none.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    async fn remove_profile_picture(&self, token: &str) -> Result<(), ApiError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// `gloo-net` backed client pre-configured with the backend base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { config: config.clone() }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Exchange credentials for a bearer token via `POST /user/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the credentials are rejected.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(LOGIN_PATH))
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let body: super::types::LoginResponse = read_json(resp).await?;
            Ok(body.token)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(LOGIN_PATH), request);
            Err(ApiError::Unavailable)
        }
    }

    /// Create an account via `POST /user/register`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend refuses it.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(REGISTER_PATH))
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            ensure_ok(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(REGISTER_PATH), request);
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait::async_trait(?Send)]
impl SessionApi for HttpApi {
    async fn check_user(&self, token: &str) -> Result<BaseUser, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(CHECK_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(CHECK_PATH), token);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_profile_picture(&self, token: &str) -> Result<Option<String>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(PROFILE_PICTURE_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(transport)?;
            let body: super::types::ProfilePictureResponse = read_json(resp).await?;
            Ok(body.into_picture())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(PROFILE_PICTURE_PATH), token);
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait::async_trait(?Send)]
impl PictureApi for HttpApi {
    async fn upload_profile_picture(&self, token: &str, file: &PictureFile) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let handle = file
                .file
                .as_ref()
                .ok_or_else(|| ApiError::Transport("no file data selected".to_owned()))?;
            let form = web_sys::FormData::new().map_err(js_transport)?;
            form.append_with_blob_and_filename(PICTURE_FIELD, handle, &file.name)
                .map_err(js_transport)?;
            let resp = gloo_net::http::Request::post(&self.url(UPLOAD_PICTURE_PATH))
                .header("Authorization", &bearer(token))
                .body(form)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let body: super::types::UploadPictureResponse = read_json(resp).await?;
            Ok(body.profile_picture_url)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(UPLOAD_PICTURE_PATH), token, file);
            Err(ApiError::Unavailable)
        }
    }

    async fn remove_profile_picture(&self, token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&self.url(REMOVE_PICTURE_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(transport)?;
            ensure_ok(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(REMOVE_PICTURE_PATH), token);
            Err(ApiError::Unavailable)
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
fn js_transport(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{err:?}"))
}

#[cfg(feature = "csr")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        return Ok(());
    }
    Err(status_error(resp).await)
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .and_then(super::types::ErrorBody::into_message);
    ApiError::Status { status, message }
}
