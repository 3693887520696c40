//! Routed pages.

pub mod info;
pub mod landing;
pub mod profile;
pub mod questions;
