//! Profile-picture state and the upload/remove workflow.
//!
//! DESIGN
//! ======
//! Page-local state (`PictureState`) and the shared session are updated
//! separately: each settle step returns a [`Settled`] describing the toast to
//! show, the session patch to apply (if any), and the preview URL to revoke.
//! Failures leave the shared session untouched.

#[cfg(test)]
#[path = "picture_test.rs"]
mod picture_test;

use super::notice::NoticeKind;
use crate::net::api::{PictureApi, SessionApi};
use crate::net::error::ApiError;
use crate::net::upload::PictureFile;

pub const ALLOWED_PICTURE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Local validation failure. The display text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PictureRejection {
    #[error("Only JPEG, PNG, or GIF images are allowed")]
    UnsupportedType(String),

    #[error("File size must be under {limit_mib}MB")]
    TooLarge { size: u64, limit_mib: u64 },
}

/// Why an upload did not produce a new picture URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Rejected(#[from] PictureRejection),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Check type and size before anything touches the network.
///
/// # Errors
///
/// Returns a [`PictureRejection`] for a disallowed MIME type or a file larger
/// than `max_bytes`.
pub fn validate_picture(file: &PictureFile, max_bytes: u64) -> Result<(), PictureRejection> {
    if !ALLOWED_PICTURE_TYPES.contains(&file.mime.as_str()) {
        return Err(PictureRejection::UnsupportedType(file.mime.clone()));
    }
    if file.size > max_bytes {
        return Err(PictureRejection::TooLarge { size: file.size, limit_mib: max_bytes.div_ceil(BYTES_PER_MIB) });
    }
    Ok(())
}

/// Best-effort lookup of the current picture. Failures are logged only.
pub async fn load_picture<A: SessionApi + ?Sized>(api: &A, token: &str) -> Option<String> {
    match api.fetch_profile_picture(token).await {
        Ok(picture) => picture,
        Err(err) => {
            log::warn!("failed to fetch profile picture: {err}");
            None
        }
    }
}

/// Validate then upload `file`, returning the new picture URL.
///
/// # Errors
///
/// [`UploadError::Rejected`] without any request when validation fails,
/// [`UploadError::Api`] when the backend call fails.
pub async fn upload_picture<A: PictureApi + ?Sized>(
    api: &A,
    token: &str,
    file: &PictureFile,
    max_bytes: u64,
) -> Result<String, UploadError> {
    validate_picture(file, max_bytes)?;
    let url = api.upload_profile_picture(token, file).await?;
    Ok(url)
}

/// Outcome of a finished mutation, for the page to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub notice: (NoticeKind, String),
    /// `Some(value)` to patch the shared session picture with `value`.
    pub shared_picture: Option<Option<String>>,
    /// Object URL that should now be revoked.
    pub revoke_preview: Option<String>,
}

/// Page-local picture display state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PictureState {
    /// Server-relative path of the saved picture.
    pub current: Option<String>,
    /// Client-side object URL shown while an upload is in flight.
    pub preview: Option<String>,
    pub uploading: bool,
}

/// What the avatar slot should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PictureView<'a> {
    Preview(&'a str),
    Saved(&'a str),
    Placeholder,
}

impl PictureState {
    pub fn view(&self) -> PictureView<'_> {
        if let Some(preview) = self.preview.as_deref() {
            PictureView::Preview(preview)
        } else if let Some(current) = self.current.as_deref() {
            PictureView::Saved(current)
        } else {
            PictureView::Placeholder
        }
    }

    /// Upload and remove are both disabled while an upload runs.
    pub fn actions_enabled(&self) -> bool {
        !self.uploading
    }

    pub fn can_remove(&self) -> bool {
        self.current.is_some() && self.actions_enabled()
    }

    /// Picture found on mount. Only a present value is applied.
    pub fn loaded(&mut self, picture: Option<String>) -> Option<String> {
        let picture = picture?;
        self.current = Some(picture.clone());
        Some(picture)
    }

    pub fn begin_upload(&mut self, preview: Option<String>) {
        self.uploading = true;
        self.preview = preview;
    }

    pub fn settle_upload(&mut self, result: Result<String, UploadError>) -> Settled {
        self.uploading = false;
        let revoke_preview = self.preview.take();
        match result {
            Ok(url) => {
                self.current = Some(url.clone());
                Settled {
                    notice: (NoticeKind::Success, "Profile picture updated!".to_owned()),
                    shared_picture: Some(Some(url)),
                    revoke_preview,
                }
            }
            Err(err) => {
                log::warn!("profile picture upload failed: {err}");
                let message = match &err {
                    UploadError::Rejected(rejection) => rejection.to_string(),
                    UploadError::Api(api) => api.user_message("Upload failed"),
                };
                Settled { notice: (NoticeKind::Error, message), shared_picture: None, revoke_preview }
            }
        }
    }

    pub fn settle_remove(&mut self, result: Result<(), ApiError>) -> Settled {
        match result {
            Ok(()) => {
                self.current = None;
                Settled {
                    notice: (NoticeKind::Success, "Profile picture removed".to_owned()),
                    shared_picture: Some(None),
                    revoke_preview: self.preview.take(),
                }
            }
            Err(err) => {
                log::warn!("profile picture removal failed: {err}");
                Settled {
                    notice: (NoticeKind::Error, "Failed to remove profile picture".to_owned()),
                    shared_picture: None,
                    revoke_preview: None,
                }
            }
        }
    }
}
