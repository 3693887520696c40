//! Route table and session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` declares the Leptos router with the same paths; this module is the
//! non-view model of them (active-link detection, guard decisions) so the
//! routing contract can be tested without a DOM.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::SessionStatus;

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/signin";
pub const SIGN_UP_PATH: &str = "/signup";
pub const NOT_FOUND_PATH: &str = "/404";

/// Presentation mode of the public landing page (`/:mode`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "signin" | "login" => Some(Self::SignIn),
            "signup" | "register" => Some(Self::SignUp),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::SignIn => SIGN_IN_PATH,
            Self::SignUp => SIGN_UP_PATH,
        }
    }
}

/// Every navigable screen. Dynamic ids are opaque and passed through as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    AskQuestion,
    Answer { question_id: String },
    EditAnswer { answer_id: String },
    EditQuestion { question_id: String },
    Profile,
    Landing(AuthMode),
    HowItWorks,
    ForgotPassword,
    ResetPassword { token: String },
    NotFound,
}

impl AppRoute {
    /// Match a URL path. `None` means the catch-all redirect to `/404` applies.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] => Self::Home,
            ["askquestion"] => Self::AskQuestion,
            ["answer", id] => Self::Answer { question_id: (*id).to_owned() },
            ["edit-answer", id] => Self::EditAnswer { answer_id: (*id).to_owned() },
            ["edit-question", id] => Self::EditQuestion { question_id: (*id).to_owned() },
            ["profile"] => Self::Profile,
            ["howitworks"] => Self::HowItWorks,
            ["forgot-password"] => Self::ForgotPassword,
            ["reset-password", token] => Self::ResetPassword { token: (*token).to_owned() },
            ["404"] => Self::NotFound,
            [mode] => Self::Landing(AuthMode::from_segment(mode)?),
            _ => return None,
        };
        Some(route)
    }

    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Home
                | Self::AskQuestion
                | Self::Answer { .. }
                | Self::EditAnswer { .. }
                | Self::EditQuestion { .. }
                | Self::Profile
        )
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => HOME_PATH.to_owned(),
            Self::AskQuestion => "/askquestion".to_owned(),
            Self::Answer { question_id } => format!("/answer/{question_id}"),
            Self::EditAnswer { answer_id } => format!("/edit-answer/{answer_id}"),
            Self::EditQuestion { question_id } => format!("/edit-question/{question_id}"),
            Self::Profile => "/profile".to_owned(),
            Self::Landing(mode) => mode.path().to_owned(),
            Self::HowItWorks => "/howitworks".to_owned(),
            Self::ForgotPassword => "/forgot-password".to_owned(),
            Self::ResetPassword { token } => format!("/reset-password/{token}"),
            Self::NotFound => NOT_FOUND_PATH.to_owned(),
        }
    }
}

/// What a protected route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: show a placeholder, do not redirect.
    Pending,
    Redirect(&'static str),
    Render,
}

pub fn guard(status: &SessionStatus) -> GuardDecision {
    match status {
        SessionStatus::Loading => GuardDecision::Pending,
        SessionStatus::Anonymous => GuardDecision::Redirect(SIGN_IN_PATH),
        SessionStatus::Authenticated(_) => GuardDecision::Render,
    }
}
