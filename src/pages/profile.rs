//! Profile page: user details plus picture fetch, upload, and removal.

use leptos::prelude::*;

use crate::components::toast::notify;
use crate::config::ClientConfig;
use crate::net::upload::PictureFile;
use crate::state::notice::{NoticeKind, Notices};
use crate::state::picture::{PictureState, PictureView, Settled, validate_picture};
use crate::state::session::SessionContext;
use crate::util::lifecycle::Liveness;

/// Apply a finished mutation to the shared session and the toast queue.
fn apply_settled(session: SessionContext, notices: RwSignal<Notices>, settled: Settled) {
    if let Some(picture) = settled.shared_picture {
        session.patch_picture(picture);
    }
    #[cfg(feature = "csr")]
    if let Some(url) = settled.revoke_preview.as_deref() {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    let (kind, message) = settled.notice;
    notify(notices, kind, message);
}

/// Validate locally, show a preview, then upload.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn start_upload(
    session: SessionContext,
    notices: RwSignal<Notices>,
    picture: RwSignal<PictureState>,
    config: &ClientConfig,
    live: &Liveness,
    file: PictureFile,
) {
    if !picture.with_untracked(PictureState::actions_enabled) {
        return;
    }
    if let Err(rejection) = validate_picture(&file, config.max_picture_bytes) {
        notify(notices, NoticeKind::Warning, rejection.to_string());
        return;
    }
    let Some(token) = session.token_untracked() else {
        return;
    };

    #[cfg(feature = "csr")]
    {
        let preview = file.file.as_ref().and_then(|f| web_sys::Url::create_object_url_with_blob(f).ok());
        picture.update(|s| s.begin_upload(preview.clone()));

        let api = crate::net::api::HttpApi::new(config);
        let max_bytes = config.max_picture_bytes;
        let live = live.clone();
        leptos::task::spawn_local(async move {
            let result = crate::state::picture::upload_picture(&api, &token, &file, max_bytes).await;
            if !live.is_live() {
                if let Some(url) = preview.as_deref() {
                    let _ = web_sys::Url::revoke_object_url(url);
                }
                return;
            }
            if let Some(settled) = picture.try_update(|s| s.settle_upload(result)) {
                apply_settled(session, notices, settled);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (live, token);
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<ClientConfig>();
    let notices = expect_context::<RwSignal<Notices>>();
    let picture = RwSignal::new(PictureState::default());
    let live = Liveness::for_current_owner();

    // Fetch the saved picture on mount.
    #[cfg(feature = "csr")]
    if let Some(token) = session.token_untracked() {
        let api = crate::net::api::HttpApi::new(&config);
        let live = live.clone();
        leptos::task::spawn_local(async move {
            let found = crate::state::picture::load_picture(&api, &token).await;
            if !live.is_live() {
                return;
            }
            if let Some(url) = picture.try_update(|s| s.loaded(found)).flatten() {
                session.patch_picture(Some(url));
            }
        });
    }

    let on_file_change = {
        let config = config.clone();
        let live = live.clone();
        move |ev: leptos::ev::Event| {
            #[cfg(feature = "csr")]
            {
                let input = event_target::<web_sys::HtmlInputElement>(&ev);
                let file = input.files().and_then(|files| files.get(0));
                // Reset so choosing the same file again still fires `change`.
                input.set_value("");
                if let Some(file) = file {
                    start_upload(session, notices, picture, &config, &live, PictureFile::from_browser_file(file));
                }
            }
            #[cfg(not(feature = "csr"))]
            let _ = (&ev, &config, &live);
        }
    };

    let on_remove = {
        let config = config.clone();
        move |_| {
            if !picture.with_untracked(PictureState::can_remove) {
                return;
            }
            let Some(token) = session.token_untracked() else {
                return;
            };

            #[cfg(feature = "csr")]
            {
                use crate::net::api::PictureApi;

                let api = crate::net::api::HttpApi::new(&config);
                let live = live.clone();
                leptos::task::spawn_local(async move {
                    let result = api.remove_profile_picture(&token).await;
                    if !live.is_live() {
                        return;
                    }
                    if let Some(settled) = picture.try_update(|s| s.settle_remove(result)) {
                        apply_settled(session, notices, settled);
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (&config, &live, token);
        }
    };

    let initials = move || {
        session
            .user()
            .and_then(|u| u.username.chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    };
    let avatar = move || {
        picture.with(|s| match s.view() {
            PictureView::Preview(url) => {
                view! { <img class="profile__image" src=url.to_owned() alt="Selected picture"/> }.into_any()
            }
            PictureView::Saved(path) => {
                view! { <img class="profile__image" src=config.asset_url(path) alt="Profile picture"/> }.into_any()
            }
            PictureView::Placeholder => view! { <div class="profile__placeholder">{initials}</div> }.into_any(),
        })
    };

    let field = move |read: fn(&crate::net::types::UserProfile) -> Option<String>| {
        move || session.user().as_ref().and_then(read).unwrap_or_else(|| "—".to_owned())
    };

    view! {
        <section class="profile">
            <h2>"Your profile"</h2>
            <div class="profile__avatar">{avatar}</div>
            <div class="profile__actions">
                <label
                    class="btn btn--primary"
                    class=("btn--disabled", move || !picture.with(PictureState::actions_enabled))
                    for="profile-picture-input"
                >
                    {move || if picture.with(|s| s.uploading) { "Uploading..." } else { "Change picture" }}
                </label>
                <input
                    id="profile-picture-input"
                    class="profile__file-input"
                    type="file"
                    accept="image/jpeg,image/png,image/gif"
                    disabled=move || !picture.with(PictureState::actions_enabled)
                    on:change=on_file_change
                />
                <Show when=move || picture.with(|s| s.current.is_some())>
                    <button
                        class="btn btn--ghost"
                        disabled=move || !picture.with(PictureState::can_remove)
                        on:click=on_remove.clone()
                    >
                        "Remove picture"
                    </button>
                </Show>
            </div>

            <dl class="profile__details">
                <dt>"Username"</dt>
                <dd>{field(|u| Some(u.username.clone()))}</dd>
                <dt>"Name"</dt>
                <dd>{field(|u| Some(u.display_name()))}</dd>
                <dt>"Email"</dt>
                <dd>{field(|u| u.email.clone())}</dd>
            </dl>
        </section>
    }
}
