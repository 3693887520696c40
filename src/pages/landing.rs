//! Landing page with the sign-in and sign-up forms, selected by `/:mode`.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::toast::notify;
use crate::config::ClientConfig;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::routes::{AuthMode, HOME_PATH, NOT_FOUND_PATH, SIGN_IN_PATH};
use crate::state::notice::{NoticeKind, Notices};
use crate::state::session::SessionContext;
use crate::util::lifecycle::Liveness;

pub const MIN_PASSWORD_LEN: usize = 8;

fn required(value: &str, message: &'static str) -> Result<String, &'static str> {
    let value = value.trim();
    if value.is_empty() { Err(message) } else { Ok(value.to_owned()) }
}

fn checked_email(value: &str) -> Result<String, &'static str> {
    let email = required(value, "Email is required")?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err("Enter a valid email address"),
    }
}

/// Validate the sign-in form. Passwords are sent as typed.
///
/// # Errors
///
/// Returns the message to show when a field is missing or malformed.
pub fn validate_sign_in(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = checked_email(email)?;
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(LoginRequest { email, password: password.to_owned() })
}

/// Raw sign-up form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpFields {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

/// Validate the sign-up form.
///
/// # Errors
///
/// Returns the message for the first invalid field.
pub fn validate_sign_up(fields: &SignUpFields) -> Result<RegisterRequest, &'static str> {
    let username = required(&fields.username, "Username is required")?;
    let firstname = required(&fields.firstname, "First name is required")?;
    let lastname = required(&fields.lastname, "Last name is required")?;
    let email = checked_email(&fields.email)?;
    if fields.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters");
    }
    Ok(RegisterRequest { username, firstname, lastname, email, password: fields.password.clone() })
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let params = use_params_map();
    let mode = move || params.with(|p| p.get("mode")).as_deref().and_then(AuthMode::from_segment);

    move || {
        if session.user().is_some() {
            return view! { <Redirect path=HOME_PATH/> }.into_any();
        }
        match mode() {
            Some(AuthMode::SignIn) => view! { <SignInForm/> }.into_any(),
            Some(AuthMode::SignUp) => view! { <SignUpForm/> }.into_any(),
            None => view! { <Redirect path=NOT_FOUND_PATH/> }.into_any(),
        }
    }
}

#[component]
fn SignInForm() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<ClientConfig>();
    let notices = expect_context::<RwSignal<Notices>>();
    let live = Liveness::for_current_owner();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_sign_in(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                notify(notices, NoticeKind::Warning, message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let live = live.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::HttpApi::new(&config).login(&request).await;
                if !live.is_live() {
                    return;
                }
                match result {
                    // The landing route redirects home once the bootstrap
                    // has resolved the new user.
                    Ok(token) => {
                        let store = crate::state::token::LocalTokenStore::from_config(&config);
                        session.sign_in(&store, token);
                    }
                    Err(err) => {
                        log::warn!("sign in failed: {err}");
                        notify(notices, NoticeKind::Error, err.user_message("Sign in failed"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, &config, &live, request);
            busy.set(false);
        }
    };

    view! {
        <div class="landing">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Login to your account"</h2>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=AuthMode::SignUp.path()>"Create a new account"</a>
                </p>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="Email address"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <a class="auth-card__forgot" href="/forgot-password">"Forgot password?"</a>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn SignUpForm() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let notices = expect_context::<RwSignal<Notices>>();
    let live = Liveness::for_current_owner();
    let fields = RwSignal::new(SignUpFields::default());
    let busy = RwSignal::new(false);

    let registered = RwSignal::new(false);
    let navigate = use_navigate();
    Effect::new(move || {
        if registered.get() {
            navigate(SIGN_IN_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match fields.with_untracked(validate_sign_up) {
            Ok(request) => request,
            Err(message) => {
                notify(notices, NoticeKind::Warning, message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let live = live.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::HttpApi::new(&config).register(&request).await;
                if !live.is_live() {
                    return;
                }
                match result {
                    Ok(()) => {
                        notify(notices, NoticeKind::Success, "Account created. Sign in to continue.");
                        registered.set(true);
                    }
                    Err(err) => {
                        log::warn!("sign up failed: {err}");
                        notify(notices, NoticeKind::Error, err.user_message("Sign up failed"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, &live, request);
            busy.set(false);
        }
    };

    let field = move |placeholder: &'static str, kind: &'static str, get: fn(&SignUpFields) -> &String, set: fn(&mut SignUpFields, String)| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                prop:value=move || fields.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    fields.update(|f| set(f, value));
                }
            />
        }
    };

    view! {
        <div class="landing">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Join the network"</h2>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=AuthMode::SignIn.path()>"Sign in"</a>
                </p>
                {field("Username", "text", |f| &f.username, |f, v| f.username = v)}
                <div class="auth-card__row">
                    {field("First name", "text", |f| &f.firstname, |f, v| f.firstname = v)}
                    {field("Last name", "text", |f| &f.lastname, |f, v| f.lastname = v)}
                </div>
                {field("Email address", "email", |f| &f.email, |f, v| f.email = v)}
                {field("Password", "password", |f| &f.password, |f, v| f.password = v)}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Agree and Join" }}
                </button>
            </form>
        </div>
    }
}
