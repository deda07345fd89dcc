//! Exercise detail page with demo image and completion recording.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api::Api;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Exercise detail — loads the routine for the `:id` route parameter and
/// records a completion into the history.
#[component]
pub fn ExercisePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate.clone());

    let params = use_params_map();
    let exercise_id = move || params.get().get("id").unwrap_or_default();

    let detail_api = api.clone();
    let exercise = LocalResource::new(move || {
        let api = detail_api.clone();
        let id = exercise_id();
        async move {
            api.fetch_exercise(&id)
                .await
                .map_err(|e| e.display_message("Unable to load the exercise details."))
        }
    });

    let sending = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let record_api = api.clone();
    let on_record = move |_| {
        if sending.get() {
            return;
        }
        sending.set(true);
        error.set(String::new());

        #[cfg(feature = "web")]
        {
            let api = record_api.clone();
            let id = exercise_id();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.record_exercise(&id).await {
                    Ok(()) => navigate("/history", leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        error.set(e.display_message("Unable to record the exercise."));
                        sending.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (&record_api, &navigate);
            sending.set(false);
        }
    };

    let demo_api = api.clone();

    view! {
        <div class="exercise-page">
            <a class="exercise-page__back" href="/">"Back"</a>

            <Suspense fallback=move || view! { <p class="muted">"Loading..."</p> }>
                {move || {
                    let api = demo_api.clone();
                    exercise.get().map(move |result| match result {
                        Ok(exercise) => view! {
                            <div class="exercise-page__detail">
                                <div class="exercise-page__title">
                                    <h1>{exercise.name.clone()}</h1>
                                    <span class="exercise-page__group">
                                        {exercise.group.clone()}
                                    </span>
                                </div>
                                <img
                                    class="exercise-page__demo"
                                    src=api.demo_url(&exercise.demo)
                                    alt=exercise.name.clone()
                                />
                                <div class="exercise-page__routine">
                                    <span>{format!("{} series", exercise.series)}</span>
                                    <span>{format!("{} repetitions", exercise.repetitions)}</span>
                                </div>
                            </div>
                        }
                            .into_any(),
                        Err(message) => view! { <p class="form-error">{message}</p> }.into_any(),
                    })
                }}
            </Suspense>

            <Show when=move || !error.get().is_empty()>
                <p class="form-error">{move || error.get()}</p>
            </Show>

            <button
                class="btn btn--primary exercise-page__record"
                disabled=move || sending.get()
                on:click=on_record
            >
                {move || if sending.get() { "Saving..." } else { "Mark as done" }}
            </button>
        </div>
    }
}
