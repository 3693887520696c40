//! Session gate for protected routes.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::loader::Loader;
use crate::routes::{GuardDecision, guard};
use crate::state::session::SessionContext;

/// Render `children` only for an authenticated session.
///
/// While the session is loading a placeholder is shown and no redirect
/// happens; once resolved without a user, navigation goes to sign-in.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    move || match guard(&session.status()) {
        GuardDecision::Pending => view! { <Loader/> }.into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
