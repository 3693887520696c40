use leptos::prelude::*;

/// Full-page spinner shown while the session resolves.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader-container">
            <div class="loader" aria-label="Loading"></div>
        </div>
    }
}
