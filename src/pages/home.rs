//! Home page listing muscle groups and the selected group's exercises.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Groups load once; the exercise list refetches
//! whenever the selected group changes.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::exercise_card::ExerciseCard;
use crate::components::group_chip::GroupChip;
use crate::components::home_header::HomeHeader;
use crate::components::tab_bar::TabBar;
use crate::net::api::Api;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Initial selection once the group list arrives.
fn default_group(groups: &[String]) -> Option<String> {
    groups.first().cloned()
}

/// Home page — group chips plus the exercise list for the active group.
/// Redirects to `/signin` if no user is signed in.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let selected_group = RwSignal::new(None::<String>);

    let groups_api = api.clone();
    let groups = LocalResource::new(move || {
        let api = groups_api.clone();
        async move {
            api.fetch_groups()
                .await
                .map_err(|e| e.display_message("Unable to load the muscle groups."))
        }
    });

    // Select the first group once the list arrives.
    Effect::new(move || {
        if selected_group.get().is_some() {
            return;
        }
        if let Some(Ok(list)) = groups.get() {
            selected_group.set(default_group(&list));
        }
    });

    let exercises_api = api.clone();
    let exercises = LocalResource::new(move || {
        let api = exercises_api.clone();
        let group = selected_group.get();
        async move {
            match group {
                Some(group) => api
                    .fetch_exercises_by_group(&group)
                    .await
                    .map_err(|e| e.display_message("Unable to load the exercises.")),
                None => Ok(Vec::new()),
            }
        }
    });

    let exercise_count =
        move || exercises.get().and_then(Result::ok).map_or(0, |list| list.len());

    let thumb_api = api.clone();

    view! {
        <div class="home-page">
            <HomeHeader/>

            <div class="home-page__groups">
                <Suspense fallback=move || view! { <p class="muted">"Loading groups..."</p> }>
                    {move || {
                        groups.get().map(|result| match result {
                            Ok(list) => view! {
                                <div class="group-row">
                                    {list
                                        .into_iter()
                                        .map(|group| {
                                            let active_name = group.clone();
                                            let is_active = Signal::derive(move || {
                                                selected_group.get().as_deref()
                                                    == Some(active_name.as_str())
                                            });
                                            let chosen = group.clone();
                                            let on_press = Callback::new(move |()| {
                                                selected_group.set(Some(chosen.clone()));
                                            });
                                            view! {
                                                <GroupChip
                                                    name=group
                                                    is_active=is_active
                                                    on_press=on_press
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any(),
                            Err(message) => view! { <p class="form-error">{message}</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </div>

            <section class="home-page__exercises">
                <header class="home-page__exercises-header">
                    <h2>"Exercises"</h2>
                    <span class="muted">{exercise_count}</span>
                </header>
                <Suspense fallback=move || view! { <p class="muted">"Loading exercises..."</p> }>
                    {move || {
                        let api = thumb_api.clone();
                        exercises.get().map(move |result| match result {
                            Ok(list) => view! {
                                <div class="exercise-list">
                                    {list
                                        .into_iter()
                                        .map(|exercise| {
                                            view! {
                                                <ExerciseCard
                                                    id=exercise.id
                                                    name=exercise.name
                                                    series=exercise.series
                                                    repetitions=exercise.repetitions
                                                    thumb_url=api.thumb_url(&exercise.thumb)
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any(),
                            Err(message) => view! { <p class="form-error">{message}</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <TabBar active="home"/>
        </div>
    }
}
