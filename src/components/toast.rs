//! Toast host and the `notify` helper.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeKind, Notices};

/// Show a toast that dismisses itself after [`NOTICE_TTL_MS`](crate::state::notice::NOTICE_TTL_MS).
pub fn notify(notices: RwSignal<Notices>, kind: NoticeKind, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = notices.try_update(|n| n.push(kind, message)) else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::notice::NOTICE_TTL_MS).await;
        notices.update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Top-right stack of active notices. Click dismisses early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<Notices>>();

    view! {
        <div class="toast-host" role="status">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.css_class() on:click=move |_| notices.update(|n| n.dismiss(id))>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
