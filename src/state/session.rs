//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is the plain model; `SessionContext` is the `Copy` handle the
//! app provides through Leptos context. Route guards, the header, and the
//! profile page read it; the bootstrapper and the profile page write it, and
//! every user write goes through [`Session::update_user`].
//!
//! INVARIANTS
//! ==========
//! - `user` is never `Some` while `token` is `None`.
//! - While `loading` is true the user is unknown to every consumer.
//! - Bootstrap results carry the epoch they were started with; a result from
//!   a superseded run is dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::bootstrap::BootstrapOutcome;
use super::token::TokenStore;
use crate::net::types::UserProfile;

/// Tri-state view of the session for consumers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated(UserProfile),
    Anonymous,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<UserProfile>,
    loading: bool,
    epoch: u64,
}

impl Session {
    /// A freshly mounted session: token read from storage, user unresolved.
    pub fn new(token: Option<String>) -> Self {
        Self { token, user: None, loading: true, epoch: 0 }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The user, hidden while a bootstrap is in flight.
    pub fn user(&self) -> Option<&UserProfile> {
        if self.loading { None } else { self.user.as_ref() }
    }

    pub fn status(&self) -> SessionStatus {
        if self.loading {
            return SessionStatus::Loading;
        }
        match &self.user {
            Some(user) => SessionStatus::Authenticated(user.clone()),
            None => SessionStatus::Anonymous,
        }
    }

    /// Start a bootstrap run and return its epoch.
    pub fn begin(&mut self) -> u64 {
        self.epoch += 1;
        self.loading = true;
        self.epoch
    }

    /// Apply a bootstrap result. Returns `false` if `epoch` is stale.
    pub fn finish(&mut self, epoch: u64, outcome: BootstrapOutcome) -> bool {
        if epoch != self.epoch {
            return false;
        }
        match outcome {
            BootstrapOutcome::Authenticated(user) => self.user = self.token.as_ref().map(|_| user),
            BootstrapOutcome::Anonymous => self.user = None,
            BootstrapOutcome::Rejected => {
                self.token = None;
                self.user = None;
            }
        }
        self.loading = false;
        true
    }

    /// The single mutation entry point for the user record.
    ///
    /// `f` receives the latest value, so overlapping async completions compose
    /// instead of overwriting each other. A user is dropped when no token is
    /// held.
    pub fn update_user<F>(&mut self, f: F)
    where
        F: FnOnce(Option<UserProfile>) -> Option<UserProfile>,
    {
        let next = f(self.user.take());
        if next.is_some() && self.token.is_none() {
            log::warn!("ignoring user update without a session token");
            return;
        }
        self.user = next;
    }

    /// Patch only `profile_picture` on the current user, if any.
    pub fn patch_picture(&mut self, picture: Option<String>) {
        self.update_user(|user| user.map(|u| u.with_picture(picture)));
    }

    /// A new token was issued. The user stays unresolved until the next
    /// bootstrap completes.
    pub fn sign_in(&mut self, token: String) {
        self.epoch += 1;
        self.token = Some(token);
        self.user = None;
        self.loading = true;
    }

    /// Drop token and user together.
    pub fn sign_out(&mut self) {
        self.epoch += 1;
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Adopt a token value changed outside this tab.
    pub fn sync_token(&mut self, token: Option<String>) {
        if token == self.token {
            return;
        }
        match token {
            Some(token) => self.sign_in(token),
            None => self.sign_out(),
        }
    }
}

// =============================================================================
// CONTEXT HANDLE
// =============================================================================

/// Reactive handle to the tab's [`Session`], provided at the app root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<Session>,
    token: Memo<Option<String>>,
}

impl SessionContext {
    pub fn new(token: Option<String>) -> Self {
        let state = RwSignal::new(Session::new(token));
        let token = Memo::new(move |_| state.with(|s| s.token.clone()));
        Self { state, token }
    }

    /// Tracked token read. Only notifies when the token value changes.
    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.token.get_untracked()
    }

    pub fn loading(&self) -> bool {
        self.state.with(Session::loading)
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn status(&self) -> SessionStatus {
        self.state.with(Session::status)
    }

    pub fn update_user<F>(&self, f: F)
    where
        F: FnOnce(Option<UserProfile>) -> Option<UserProfile>,
    {
        self.state.update(|s| s.update_user(f));
    }

    pub fn set_user(&self, user: Option<UserProfile>) {
        self.update_user(move |_| user);
    }

    pub fn patch_picture(&self, picture: Option<String>) {
        self.state.update(|s| s.patch_picture(picture));
    }

    pub fn begin_bootstrap(&self) -> u64 {
        self.state.try_update(Session::begin).unwrap_or_default()
    }

    pub fn finish_bootstrap(&self, epoch: u64, outcome: BootstrapOutcome) -> bool {
        self.state.try_update(|s| s.finish(epoch, outcome)).unwrap_or(false)
    }

    pub fn sign_in<S: TokenStore + ?Sized>(&self, store: &S, token: String) {
        store.write(&token);
        self.state.update(|s| s.sign_in(token));
    }

    pub fn sign_out<S: TokenStore + ?Sized>(&self, store: &S) {
        store.clear();
        self.state.update(Session::sign_out);
    }

    pub fn sync_token(&self, token: Option<String>) {
        self.state.update(|s| s.sync_token(token));
    }
}
