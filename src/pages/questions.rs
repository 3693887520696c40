//! Question and answer pages. Only the shells exist here: each page shows
//! where it sits in the flow and the identifier it was routed with.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::routes::AppRoute;
use crate::state::session::SessionContext;

/// Read one dynamic segment. Segments are opaque identifiers.
fn param(name: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    let params = use_params_map();
    move || params.with(|p| p.get(name).unwrap_or_default())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let greeting = move || {
        session.user().map(|u| format!("Welcome, {}", u.display_name())).unwrap_or_default()
    };

    view! {
        <section class="home">
            <div class="home__top">
                <a class="btn btn--primary" href=AppRoute::AskQuestion.to_path()>"Ask Question"</a>
                <p class="home__greeting">{greeting}</p>
            </div>
            <h3>"Questions"</h3>
            <p class="home__empty">"No questions yet."</p>
        </section>
    }
}

#[component]
pub fn AskQuestionPage() -> impl IntoView {
    view! {
        <section class="ask">
            <h2>"Steps to write a good question"</h2>
            <ul>
                <li>"Summarize your problem in a one-line title."</li>
                <li>"Describe your problem in more detail."</li>
                <li>"Describe what you tried and what you expected to happen."</li>
            </ul>
        </section>
    }
}

#[component]
pub fn AnswerPage() -> impl IntoView {
    let question_id = param("question_id");
    view! {
        <section class="answer">
            <h2>"Question"</h2>
            <p class="answer__ref">"Question " {question_id}</p>
        </section>
    }
}

#[component]
pub fn EditAnswerPage() -> impl IntoView {
    let answer_id = param("answerid");
    view! {
        <section class="edit">
            <h2>"Edit answer"</h2>
            <p class="edit__ref">"Answer " {answer_id}</p>
        </section>
    }
}

#[component]
pub fn EditQuestionPage() -> impl IntoView {
    let question_id = param("questionid");
    view! {
        <section class="edit">
            <h2>"Edit question"</h2>
            <p class="edit__ref">"Question " {question_id}</p>
        </section>
    }
}
