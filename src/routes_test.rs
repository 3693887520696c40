use super::*;
use crate::net::types::BaseUser;

// =============================================================
// Helpers
// =============================================================

fn authenticated() -> SessionStatus {
    SessionStatus::Authenticated(
        BaseUser { id: 1, username: "ada".to_owned(), firstname: None, lastname: None, email: None }.enrich(None),
    )
}

/// Where a visit to `path` ends up.
fn visit(path: &str, status: &SessionStatus) -> Result<AppRoute, Option<&'static str>> {
    let Some(route) = AppRoute::parse(path) else {
        return Err(Some(NOT_FOUND_PATH));
    };
    if !route.is_protected() {
        return Ok(route);
    }
    match guard(status) {
        GuardDecision::Render => Ok(route),
        GuardDecision::Redirect(to) => Err(Some(to)),
        GuardDecision::Pending => Err(None),
    }
}

// =============================================================
// parse
// =============================================================

#[test]
fn parse_static_routes() {
    assert_eq!(AppRoute::parse("/"), Some(AppRoute::Home));
    assert_eq!(AppRoute::parse(""), Some(AppRoute::Home));
    assert_eq!(AppRoute::parse("/askquestion"), Some(AppRoute::AskQuestion));
    assert_eq!(AppRoute::parse("/profile/"), Some(AppRoute::Profile));
    assert_eq!(AppRoute::parse("/howitworks"), Some(AppRoute::HowItWorks));
    assert_eq!(AppRoute::parse("/forgot-password"), Some(AppRoute::ForgotPassword));
    assert_eq!(AppRoute::parse("/404"), Some(AppRoute::NotFound));
}

#[test]
fn parse_passes_dynamic_ids_through_unvalidated() {
    assert_eq!(AppRoute::parse("/answer/42"), Some(AppRoute::Answer { question_id: "42".to_owned() }));
    assert_eq!(
        AppRoute::parse("/edit-answer/not-a-number"),
        Some(AppRoute::EditAnswer { answer_id: "not-a-number".to_owned() })
    );
    assert_eq!(
        AppRoute::parse("/edit-question/q%201"),
        Some(AppRoute::EditQuestion { question_id: "q%201".to_owned() })
    );
    assert_eq!(
        AppRoute::parse("/reset-password/abc.def"),
        Some(AppRoute::ResetPassword { token: "abc.def".to_owned() })
    );
}

#[test]
fn parse_auth_modes() {
    assert_eq!(AppRoute::parse("/signin"), Some(AppRoute::Landing(AuthMode::SignIn)));
    assert_eq!(AppRoute::parse("/signup"), Some(AppRoute::Landing(AuthMode::SignUp)));
    assert_eq!(AppRoute::parse("/login?next=/profile"), Some(AppRoute::Landing(AuthMode::SignIn)));
}

#[test]
fn parse_unknown_paths_fall_through() {
    assert_eq!(AppRoute::parse("/unknown-path"), None);
    assert_eq!(AppRoute::parse("/answer"), None);
    assert_eq!(AppRoute::parse("/answer/1/extra"), None);
}

#[test]
fn to_path_round_trips_through_parse() {
    let routes = [
        AppRoute::Home,
        AppRoute::Answer { question_id: "7".to_owned() },
        AppRoute::Landing(AuthMode::SignUp),
        AppRoute::ResetPassword { token: "t".to_owned() },
        AppRoute::NotFound,
    ];
    for route in routes {
        assert_eq!(AppRoute::parse(&route.to_path()), Some(route));
    }
}

#[test]
fn protected_and_public_classes() {
    assert!(AppRoute::Home.is_protected());
    assert!(AppRoute::Profile.is_protected());
    assert!(AppRoute::EditQuestion { question_id: "1".to_owned() }.is_protected());
    assert!(!AppRoute::Landing(AuthMode::SignIn).is_protected());
    assert!(!AppRoute::HowItWorks.is_protected());
    assert!(!AppRoute::NotFound.is_protected());
}

// =============================================================
// guard
// =============================================================

#[test]
fn loading_is_a_strict_gate() {
    assert_eq!(guard(&SessionStatus::Loading), GuardDecision::Pending);
    for path in ["/", "/profile", "/askquestion", "/answer/1"] {
        assert_eq!(visit(path, &SessionStatus::Loading), Err(None));
    }
}

#[test]
fn anonymous_is_sent_to_sign_in() {
    assert_eq!(guard(&SessionStatus::Anonymous), GuardDecision::Redirect("/signin"));
}

#[test]
fn authenticated_renders() {
    assert_eq!(guard(&authenticated()), GuardDecision::Render);
}

// =============================================================
// Visits
// =============================================================

#[test]
fn unauthenticated_profile_visit_redirects_to_sign_in() {
    assert_eq!(visit("/profile", &SessionStatus::Anonymous), Err(Some(SIGN_IN_PATH)));
}

#[test]
fn unknown_path_redirects_to_not_found() {
    assert_eq!(visit("/unknown-path", &SessionStatus::Anonymous), Err(Some(NOT_FOUND_PATH)));
    assert_eq!(visit("/unknown-path", &authenticated()), Err(Some(NOT_FOUND_PATH)));
}

#[test]
fn public_routes_render_for_anyone() {
    assert_eq!(visit("/howitworks", &SessionStatus::Loading), Ok(AppRoute::HowItWorks));
    assert_eq!(visit("/signin", &SessionStatus::Anonymous), Ok(AppRoute::Landing(AuthMode::SignIn)));
}

#[test]
fn authenticated_home_renders() {
    assert_eq!(visit("/", &authenticated()), Ok(AppRoute::Home));
}
