//! Public informational pages and the not-found page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::routes::{AuthMode, HOME_PATH};

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <section class="info">
            <h2>"How it works"</h2>
            <ol>
                <li>"Create an account or sign in."</li>
                <li>"Ask a question, or browse what others asked."</li>
                <li>"Answer questions you know something about."</li>
            </ol>
            <a class="btn btn--primary" href=AuthMode::SignUp.path()>"Get started"</a>
        </section>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <section class="info">
            <h2>"Forgot your password?"</h2>
            <p>"Contact support to receive a password reset link."</p>
            <a href=AuthMode::SignIn.path()>"Back to sign in"</a>
        </section>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let params = use_params_map();
    let has_token = move || params.with(|p| p.get("token").is_some_and(|t| !t.is_empty()));

    view! {
        <section class="info">
            <h2>"Reset password"</h2>
            <Show when=has_token fallback=|| view! { <p>"This reset link is invalid."</p> }>
                <p>"Follow the instructions sent with this link to choose a new password."</p>
            </Show>
            <a href=AuthMode::SignIn.path()>"Back to sign in"</a>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="info info--not-found">
            <h2>"Page not found"</h2>
            <p>"The page you were looking for does not exist."</p>
            <a class="btn btn--primary" href=HOME_PATH>"Back to home"</a>
        </section>
    }
}
