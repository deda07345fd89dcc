//! Bottom navigation between the authenticated screens.

use leptos::prelude::*;

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab-bar__item tab-bar__item--active"
    } else {
        "tab-bar__item"
    }
}

/// Tab bar linking Home, History, and Profile.
#[component]
pub fn TabBar(active: &'static str) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            <a class=tab_class(active == "home") href="/">"Home"</a>
            <a class=tab_class(active == "history") href="/history">"History"</a>
            <a class=tab_class(active == "profile") href="/profile">"Profile"</a>
        </nav>
    }
}
