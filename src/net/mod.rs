//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the calls, `types` defines the wire schema, `error` is the
//! shared failure type, and `upload` wraps browser file handles.

pub mod api;
pub mod error;
pub mod types;
pub mod upload;
