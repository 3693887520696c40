//! Root application component with routing, context providers, and the
//! session bootstrap.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::{guard::RequireSession, header::Header, loader::Loader, toast::ToastHost};
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    info::{ForgotPasswordPage, HowItWorksPage, NotFoundPage, ResetPasswordPage},
    landing::LandingPage,
    profile::ProfilePage,
    questions::{AnswerPage, AskQuestionPage, EditAnswerPage, EditQuestionPage, HomePage},
};
use crate::routes::NOT_FOUND_PATH;
use crate::state::bootstrap::resolve_session;
use crate::state::notice::Notices;
use crate::state::session::SessionContext;
use crate::state::token::{LocalTokenStore, TokenStore};

/// Root application component.
///
/// Provides the config, session, and notice contexts and sets up
/// client-side routing. Route content is withheld until the session has
/// resolved.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env().unwrap_or_else(|err| {
        log::error!("invalid client configuration, using defaults: {err}");
        ClientConfig::default()
    });
    let session = SessionContext::new(LocalTokenStore::from_config(&config).read());

    provide_context(config);
    provide_context(session);
    provide_context(RwSignal::new(Notices::default()));

    view! {
        <Title text="Evangadi Forum"/>

        <Router>
            <SessionBootstrap/>
            <Show when=move || !session.loading() fallback=|| view! { <Loader/> }>
                <Header/>
                <main class="page">
                    <Routes fallback=|| view! { <Redirect path=NOT_FOUND_PATH/> }>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <RequireSession><HomePage/></RequireSession> }
                        />
                        <Route
                            path=StaticSegment("askquestion")
                            view=|| view! { <RequireSession><AskQuestionPage/></RequireSession> }
                        />
                        <Route
                            path=(StaticSegment("answer"), ParamSegment("question_id"))
                            view=|| view! { <RequireSession><AnswerPage/></RequireSession> }
                        />
                        <Route
                            path=(StaticSegment("edit-answer"), ParamSegment("answerid"))
                            view=|| view! { <RequireSession><EditAnswerPage/></RequireSession> }
                        />
                        <Route
                            path=(StaticSegment("edit-question"), ParamSegment("questionid"))
                            view=|| view! { <RequireSession><EditQuestionPage/></RequireSession> }
                        />
                        <Route
                            path=StaticSegment("profile")
                            view=|| view! { <RequireSession><ProfilePage/></RequireSession> }
                        />
                        <Route path=StaticSegment("howitworks") view=HowItWorksPage/>
                        <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                        <Route path=(StaticSegment("reset-password"), ParamSegment("token")) view=ResetPasswordPage/>
                        <Route path=StaticSegment("404") view=NotFoundPage/>
                        // Last: any other single segment is an auth mode or a 404.
                        <Route path=ParamSegment("mode") view=LandingPage/>
                    </Routes>
                </main>
            </Show>
            <ToastHost/>
        </Router>
    }
}

/// Validates the stored token and fills in the session user.
///
/// Re-runs whenever the session token changes. A rejected token is
/// cleared and the browser is sent to sign-in with a replace navigation.
#[component]
fn SessionBootstrap() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    #[cfg(feature = "csr")]
    watch_token_storage(session, config.token_key.clone());

    Effect::new(move || {
        // Tracked: a new token value starts a new run.
        let _ = session.token();
        let epoch = session.begin_bootstrap();
        let store = LocalTokenStore::from_config(&config);
        let api = HttpApi::new(&config);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = resolve_session(&store, &api).await;
            let redirect = outcome.redirect();
            if !session.finish_bootstrap(epoch, outcome) {
                log::debug!("discarded stale session bootstrap {epoch}");
                return;
            }
            if let Some(path) = redirect {
                navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
    });
}

/// Follow sign-in and sign-out performed in other tabs.
#[cfg(feature = "csr")]
fn watch_token_storage(session: SessionContext, token_key: String) {
    let _ = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
        // A `None` key means the whole storage area was cleared.
        if ev.key().is_some_and(|key| key != token_key) {
            return;
        }
        session.sync_token(ev.new_value().and_then(crate::state::token::normalize_token));
    });
}
