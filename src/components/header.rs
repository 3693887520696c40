//! Site header with navigation and the sign-out action.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ClientConfig;
use crate::routes::{AppRoute, AuthMode, HOME_PATH, SIGN_IN_PATH};
use crate::state::session::SessionContext;
use crate::state::token::{LocalTokenStore, TokenStore};

fn link_class(active: Option<&AppRoute>, target: &AppRoute) -> &'static str {
    if active == Some(target) { "site-header__link site-header__link--active" } else { "site-header__link" }
}

/// Drop token and user together and return where to go next.
fn sign_out_target<S: TokenStore + ?Sized>(session: SessionContext, store: &S) -> &'static str {
    session.sign_out(store);
    SIGN_IN_PATH
}

/// Site header. Signing out clears token and user together, then moves to
/// the sign-in page.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let store = LocalTokenStore::from_config(&expect_context::<ClientConfig>());
    let location = use_location();
    let active = Memo::new(move |_| AppRoute::parse(&location.pathname.get()));

    let navigate = use_navigate();
    let on_sign_out = move |_| {
        let target = sign_out_target(session, &store);
        navigate(target, NavigateOptions::default());
    };

    let signed_in = move || {
        let name = move || session.user().map(|u| u.display_name()).unwrap_or_default();
        view! {
            <a href=AppRoute::Home.to_path() class=move || link_class(active.get().as_ref(), &AppRoute::Home)>
                "Home"
            </a>
            <a
                href=AppRoute::AskQuestion.to_path()
                class=move || link_class(active.get().as_ref(), &AppRoute::AskQuestion)
            >
                "Ask"
            </a>
            <a href=AppRoute::Profile.to_path() class=move || link_class(active.get().as_ref(), &AppRoute::Profile)>
                {name}
            </a>
        }
    };

    let signed_out = move || {
        let sign_in = AppRoute::Landing(AuthMode::SignIn);
        let href = sign_in.to_path();
        view! {
            <a href=href class=move || link_class(active.get().as_ref(), &sign_in)>
                "Sign in"
            </a>
        }
    };

    view! {
        <header class="site-header">
            <a href=HOME_PATH class="site-header__brand">"Q&A"</a>
            <nav class="site-header__nav">
                <a href=AppRoute::HowItWorks.to_path() class="site-header__link">"How it works"</a>
                <Show when=move || session.user().is_some() fallback=signed_out>
                    {signed_in}
                </Show>
                <button class="btn btn--ghost" hidden=move || session.user().is_none() on:click=on_sign_out>
                    "Sign out"
                </button>
            </nav>
        </header>
    }
}
