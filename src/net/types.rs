//! Wire DTOs for the Q&A REST backend.
//!
//! DESIGN
//! ======
//! The session user is modelled as a two-step pipeline: `/user/check`
//! yields a [`BaseUser`] with no picture, and [`BaseUser::enrich`] turns it
//! into the [`UserProfile`] the rest of the client works with. A failed
//! picture lookup therefore still has a well-defined typed result.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// User record returned by `GET /user/check`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseUser {
    /// Numeric user id. Older backends send it as `userid`.
    #[serde(alias = "userid", deserialize_with = "deserialize_user_id")]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl BaseUser {
    /// Attach the (optional) profile picture and produce the session user.
    pub fn enrich(self, profile_picture: Option<String>) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username,
            firstname: self.firstname,
            lastname: self.lastname,
            email: self.email,
            profile_picture: profile_picture.filter(|p| !p.trim().is_empty()),
        }
    }
}

/// The authenticated user held by the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    /// Server-relative picture path (e.g. `/uploads/ada.png`), if any.
    pub profile_picture: Option<String>,
}

impl UserProfile {
    /// Replace only the picture field.
    #[must_use]
    pub fn with_picture(mut self, profile_picture: Option<String>) -> Self {
        self.profile_picture = profile_picture.filter(|p| !p.trim().is_empty());
        self
    }

    /// `"First Last"` when both names are known, otherwise the username.
    pub fn display_name(&self) -> String {
        match (self.firstname.as_deref(), self.lastname.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_owned(),
            _ => self.username.clone(),
        }
    }
}

/// Body of `GET /user/profile-picture`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProfilePictureResponse {
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
}

impl ProfilePictureResponse {
    /// The picture path, treating empty strings as absent.
    pub fn into_picture(self) -> Option<String> {
        self.profile_picture.filter(|p| !p.trim().is_empty())
    }
}

/// Body of `POST /user/upload-profile-picture`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadPictureResponse {
    #[serde(rename = "profilePictureUrl")]
    pub profile_picture_url: String,
}

/// Error body shape used by the backend. Either key may carry the text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.msg).filter(|m| !m.trim().is_empty())
    }
}

/// Body of `POST /user/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /user/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of `POST /user/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

fn deserialize_user_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| D::Error::custom("expected integer user id")),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom("expected numeric user id")),
        _ => Err(D::Error::custom("expected user id")),
    }
}
