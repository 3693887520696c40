//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `picture`, `notice`, ...) and kept
//! as plain structs with the transitions on them, so the behavior is
//! testable without a browser. Reactive wrappers stay thin.

pub mod bootstrap;
pub mod notice;
pub mod picture;
pub mod session;
pub mod token;

#[cfg(test)]
pub(crate) mod test_helpers;
