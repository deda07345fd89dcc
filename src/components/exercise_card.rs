//! Card for one exercise in the home list.

#[cfg(test)]
#[path = "exercise_card_test.rs"]
mod exercise_card_test;

use leptos::prelude::*;

/// Human-readable routine summary, e.g. `"3 series x 12 repetitions"`.
#[must_use]
pub fn routine_summary(series: u32, repetitions: &str) -> String {
    format!("{series} series x {repetitions} repetitions")
}

/// A clickable card linking to the exercise detail page.
#[component]
pub fn ExerciseCard(
    id: String,
    name: String,
    series: u32,
    repetitions: String,
    thumb_url: String,
) -> impl IntoView {
    let href = format!("/exercise/{id}");
    let alt = name.clone();

    view! {
        <a class="exercise-card" href=href>
            <img class="exercise-card__thumb" src=thumb_url alt=alt/>
            <div class="exercise-card__body">
                <span class="exercise-card__name">{name}</span>
                <span class="exercise-card__summary">{routine_summary(series, &repetitions)}</span>
            </div>
        </a>
    }
}
