//! One-shot resolution of the session from the stored token.
//!
//! PIPELINE
//! ========
//! token? -> `check` -> `BaseUser` -> best-effort picture -> `UserProfile`.
//! The picture call only starts after `check` succeeds and can never turn an
//! authenticated result into a failure.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use super::token::TokenStore;
use crate::net::api::SessionApi;
use crate::net::types::UserProfile;
use crate::routes::SIGN_IN_PATH;

/// Result of a bootstrap run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// No token was stored; no request was made.
    Anonymous,
    /// The token was accepted.
    Authenticated(UserProfile),
    /// The backend refused the token. It has already been cleared.
    Rejected,
}

impl BootstrapOutcome {
    /// Where the app must navigate after applying this outcome, if anywhere.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            Self::Rejected => Some(SIGN_IN_PATH),
            Self::Anonymous | Self::Authenticated(_) => None,
        }
    }
}

/// Resolve the current user from `store` using `api`.
pub async fn resolve_session<S, A>(store: &S, api: &A) -> BootstrapOutcome
where
    S: TokenStore + ?Sized,
    A: SessionApi + ?Sized,
{
    let Some(token) = store.read() else {
        return BootstrapOutcome::Anonymous;
    };

    let base = match api.check_user(&token).await {
        Ok(user) => user,
        Err(err) => {
            // A newer token may have been stored while the check ran; only
            // the token that was actually rejected is cleared.
            if store.read().as_deref() == Some(token.as_str()) {
                log::warn!("session check failed, clearing stored token: {err}");
                store.clear();
            } else {
                log::warn!("session check failed for a token that has since been replaced: {err}");
            }
            return BootstrapOutcome::Rejected;
        }
    };

    let picture = match api.fetch_profile_picture(&token).await {
        Ok(picture) => picture,
        Err(err) => {
            log::warn!("failed to fetch profile picture for {}: {err}", base.username);
            None
        }
    };

    BootstrapOutcome::Authenticated(base.enrich(picture))
}
