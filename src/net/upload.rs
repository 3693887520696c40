//! File handle passed from the profile page to the upload call.

/// A user-selected picture file.
///
/// The metadata fields drive local validation; the browser `File` handle is
/// only present in the `csr` build and is what actually gets uploaded.
#[derive(Clone, Debug)]
pub struct PictureFile {
    pub name: String,
    /// MIME type reported by the browser (e.g. `image/png`).
    pub mime: String,
    /// Size in bytes.
    pub size: u64,
    #[cfg(feature = "csr")]
    pub(crate) file: Option<web_sys::File>,
}

impl PictureFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
            #[cfg(feature = "csr")]
            file: None,
        }
    }

    /// Wrap a file picked through an `<input type="file">`.
    #[cfg(feature = "csr")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_browser_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime: file.type_(),
            size: file.size() as u64,
            file: Some(file),
        }
    }
}
