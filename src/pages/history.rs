//! Workout history grouped by day.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::history_card::HistoryCard;
use crate::components::screen_header::ScreenHeader;
use crate::components::tab_bar::TabBar;
use crate::net::api::Api;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// History page — one section per day, newest first as served by the
/// backend. Redirects to `/signin` if no user is signed in.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let history_api = api.clone();
    let history = LocalResource::new(move || {
        let api = history_api.clone();
        async move {
            api.fetch_history()
                .await
                .map_err(|e| e.display_message("Unable to load the workout history."))
        }
    });

    view! {
        <div class="history-page">
            <ScreenHeader title="Workout History"/>

            <Suspense fallback=move || view! { <p class="muted">"Loading history..."</p> }>
                {move || {
                    history.get().map(|result| match result {
                        Ok(days) if days.is_empty() => view! {
                            <p class="history-page__empty">
                                "No exercises recorded yet. Shall we train today?"
                            </p>
                        }
                            .into_any(),
                        Ok(days) => view! {
                            <div class="history-page__sections">
                                {days
                                    .into_iter()
                                    .map(|day| view! {
                                        <section class="history-section">
                                            <h2 class="history-section__title">{day.title}</h2>
                                            {day
                                                .data
                                                .into_iter()
                                                .map(|entry| view! {
                                                    <HistoryCard
                                                        group=entry.group
                                                        name=entry.name
                                                        hour=entry.hour
                                                    />
                                                })
                                                .collect::<Vec<_>>()}
                                        </section>
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any(),
                        Err(message) => view! { <p class="form-error">{message}</p> }.into_any(),
                    })
                }}
            </Suspense>

            <TabBar active="history"/>
        </div>
    }
}
