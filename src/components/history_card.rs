//! Row for one recorded exercise inside a history day section.

use leptos::prelude::*;

/// Group, exercise name, and the hour it was recorded.
#[component]
pub fn HistoryCard(group: String, name: String, hour: String) -> impl IntoView {
    view! {
        <div class="history-card">
            <div class="history-card__body">
                <span class="history-card__group">{group}</span>
                <span class="history-card__name">{name}</span>
            </div>
            <span class="history-card__hour">{hour}</span>
        </div>
    }
}
