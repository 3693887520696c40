//! Fakes shared by state tests.

use std::cell::RefCell;

use super::token::TokenStore;
use crate::net::api::{PictureApi, SessionApi};
use crate::net::error::ApiError;
use crate::net::types::BaseUser;
use crate::net::upload::PictureFile;

// =========================================================================
// MemoryTokenStore
// =========================================================================

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn write(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

// =========================================================================
// FakeApi
// =========================================================================

/// Scripted backend that records which endpoints were hit and with what token.
pub struct FakeApi {
    pub check: Result<BaseUser, ApiError>,
    pub picture: Result<Option<String>, ApiError>,
    pub upload: Result<String, ApiError>,
    pub remove: Result<(), ApiError>,
    pub calls: RefCell<Vec<(&'static str, String)>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            check: Ok(dummy_user()),
            picture: Ok(None),
            upload: Ok("/uploads/new.png".to_owned()),
            remove: Ok(()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    /// Endpoint names in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().iter().map(|(name, _)| *name).collect()
    }

    /// Tokens presented, in call order.
    pub fn tokens(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(_, token)| token.clone()).collect()
    }

    fn record(&self, name: &'static str, token: &str) {
        self.calls.borrow_mut().push((name, token.to_owned()));
    }
}

#[async_trait::async_trait(?Send)]
impl SessionApi for FakeApi {
    async fn check_user(&self, token: &str) -> Result<BaseUser, ApiError> {
        self.record("check", token);
        self.check.clone()
    }

    async fn fetch_profile_picture(&self, token: &str) -> Result<Option<String>, ApiError> {
        self.record("picture", token);
        self.picture.clone()
    }
}

#[async_trait::async_trait(?Send)]
impl PictureApi for FakeApi {
    async fn upload_profile_picture(&self, token: &str, _file: &PictureFile) -> Result<String, ApiError> {
        self.record("upload", token);
        self.upload.clone()
    }

    async fn remove_profile_picture(&self, token: &str) -> Result<(), ApiError> {
        self.record("remove", token);
        self.remove.clone()
    }
}

pub fn dummy_user() -> BaseUser {
    BaseUser {
        id: 1,
        username: "ada".to_owned(),
        firstname: None,
        lastname: None,
        email: None,
    }
}

pub fn unauthorized() -> ApiError {
    ApiError::Status { status: 401, message: Some("Authentication invalid".to_owned()) }
}
