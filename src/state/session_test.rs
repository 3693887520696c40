use super::*;
use crate::state::test_helpers::{MemoryTokenStore, dummy_user};

// =============================================================
// Helpers
// =============================================================

fn ada() -> UserProfile {
    dummy_user().enrich(None)
}

fn signed_in_session() -> Session {
    let mut session = Session::new(Some("tok".to_owned()));
    let epoch = session.begin();
    assert!(session.finish(epoch, BootstrapOutcome::Authenticated(ada())));
    session
}

// =============================================================
// Construction and status
// =============================================================

#[test]
fn new_session_is_loading_and_hides_user() {
    let session = Session::new(Some("tok".to_owned()));
    assert!(session.loading());
    assert_eq!(session.user(), None);
    assert_eq!(session.status(), SessionStatus::Loading);
}

#[test]
fn loading_masks_user_even_when_present() {
    let mut session = signed_in_session();
    session.begin();
    assert_eq!(session.user(), None);
    assert_eq!(session.status(), SessionStatus::Loading);
}

#[test]
fn finish_authenticated_exposes_user() {
    let session = signed_in_session();
    assert!(!session.loading());
    assert_eq!(session.status(), SessionStatus::Authenticated(ada()));
}

#[test]
fn finish_anonymous_resolves_without_user() {
    let mut session = Session::new(None);
    let epoch = session.begin();
    assert!(session.finish(epoch, BootstrapOutcome::Anonymous));
    assert_eq!(session.status(), SessionStatus::Anonymous);
}

#[test]
fn finish_rejected_drops_token_and_user_together() {
    let mut session = Session::new(Some("expired".to_owned()));
    let epoch = session.begin();
    assert!(session.finish(epoch, BootstrapOutcome::Rejected));
    assert_eq!(session.token(), None);
    assert_eq!(session.status(), SessionStatus::Anonymous);
}

// =============================================================
// Epochs
// =============================================================

#[test]
fn stale_bootstrap_result_is_discarded() {
    let mut session = Session::new(Some("old".to_owned()));
    let first = session.begin();
    session.sign_in("new".to_owned());
    let second = session.begin();

    assert!(!session.finish(first, BootstrapOutcome::Rejected));
    assert_eq!(session.token(), Some("new"));
    assert!(session.loading());

    assert!(session.finish(second, BootstrapOutcome::Authenticated(ada())));
    assert_eq!(session.user().map(|u| u.username.as_str()), Some("ada"));
}

#[test]
fn sign_out_invalidates_in_flight_bootstrap() {
    let mut session = Session::new(Some("tok".to_owned()));
    let epoch = session.begin();
    session.sign_out();
    assert!(!session.finish(epoch, BootstrapOutcome::Authenticated(ada())));
    assert_eq!(session.status(), SessionStatus::Anonymous);
}

// =============================================================
// update_user
// =============================================================

#[test]
fn functional_updates_compose() {
    let mut session = signed_in_session();
    session.update_user(|u| u.map(|u| u.with_picture(Some("/a.png".to_owned()))));
    session.update_user(|u| {
        u.map(|mut u| {
            u.email = Some("ada@example.com".to_owned());
            u
        })
    });
    let user = session.user().unwrap();
    assert_eq!(user.profile_picture.as_deref(), Some("/a.png"));
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn update_user_refuses_user_without_token() {
    let mut session = Session::new(None);
    let epoch = session.begin();
    session.finish(epoch, BootstrapOutcome::Anonymous);
    session.update_user(|_| Some(ada()));
    assert_eq!(session.user(), None);
}

#[test]
fn patch_picture_without_user_is_noop() {
    let mut session = Session::new(None);
    session.patch_picture(Some("/a.png".to_owned()));
    assert_eq!(session.user(), None);
}

#[test]
fn patch_picture_clears_with_none() {
    let mut session = signed_in_session();
    session.patch_picture(Some("/a.png".to_owned()));
    session.patch_picture(None);
    assert_eq!(session.user().unwrap().profile_picture, None);
}

// =============================================================
// Token changes
// =============================================================

#[test]
fn sign_in_sets_token_and_waits_for_bootstrap() {
    let mut session = Session::new(None);
    session.sign_in("fresh".to_owned());
    assert_eq!(session.token(), Some("fresh"));
    assert_eq!(session.status(), SessionStatus::Loading);
}

#[test]
fn sign_out_clears_everything() {
    let mut session = signed_in_session();
    session.sign_out();
    assert_eq!(session.token(), None);
    assert!(!session.loading());
    assert_eq!(session.status(), SessionStatus::Anonymous);
}

#[test]
fn sync_token_ignores_same_value() {
    let mut session = signed_in_session();
    let before = session.clone();
    session.sync_token(Some("tok".to_owned()));
    assert_eq!(session, before);
}

#[test]
fn sync_token_from_other_tab() {
    let mut session = signed_in_session();
    session.sync_token(None);
    assert_eq!(session.status(), SessionStatus::Anonymous);
    session.sync_token(Some("other".to_owned()));
    assert_eq!(session.token(), Some("other"));
    assert!(session.loading());
}

// =============================================================
// SessionContext
// =============================================================

#[test]
fn context_sign_in_and_out_write_through_store() {
    let store = MemoryTokenStore::default();
    let ctx = SessionContext::new(None);

    ctx.sign_in(&store, "tok".to_owned());
    assert_eq!(store.read().as_deref(), Some("tok"));
    assert_eq!(ctx.token_untracked().as_deref(), Some("tok"));
    assert!(ctx.loading());

    let epoch = ctx.begin_bootstrap();
    assert!(ctx.finish_bootstrap(epoch, BootstrapOutcome::Authenticated(ada())));
    ctx.patch_picture(Some("/p.png".to_owned()));
    assert_eq!(ctx.user().unwrap().profile_picture.as_deref(), Some("/p.png"));

    ctx.sign_out(&store);
    assert_eq!(store.read(), None);
    assert_eq!(ctx.user(), None);
    assert_eq!(ctx.status(), SessionStatus::Anonymous);
}

#[test]
fn token_subscribers_rerun_only_when_token_value_changes() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use leptos::reactive::effect::ImmediateEffect;
    use leptos::reactive::owner::Owner;

    let owner = Owner::new();
    owner.with(|| {
        let store = MemoryTokenStore::with_token("tok");
        let ctx = SessionContext::new(store.read());
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let _bootstrap_trigger = ImmediateEffect::new(move || {
            let _ = ctx.token();
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        // Loading and epoch bookkeeping leave the token alone.
        let epoch = ctx.begin_bootstrap();
        assert!(ctx.finish_bootstrap(epoch, BootstrapOutcome::Authenticated(ada())));
        ctx.patch_picture(Some("/a.png".to_owned()));
        ctx.sync_token(Some("tok".to_owned()));
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        ctx.sign_in(&store, "fresh".to_owned());
        assert_eq!(runs.load(Ordering::SeqCst), 2);

        let epoch = ctx.begin_bootstrap();
        ctx.finish_bootstrap(epoch, BootstrapOutcome::Anonymous);
        assert_eq!(runs.load(Ordering::SeqCst), 2);

        ctx.sync_token(None);
        assert_eq!(runs.load(Ordering::SeqCst), 3);
    });
}
