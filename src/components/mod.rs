//! Reusable UI components shared by pages and the app shell.

pub mod guard;
pub mod header;
pub mod loader;
pub mod toast;
