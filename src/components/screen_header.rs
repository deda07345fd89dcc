//! Title bar for secondary screens (history, profile).

use leptos::prelude::*;

/// Centered screen title.
#[component]
pub fn ScreenHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="screen-header">
            <h1>{title}</h1>
        </header>
    }
}
