//! Selectable muscle-group chip for the home page group row.

use leptos::prelude::*;

/// A single group pill; highlighted while its group is the active filter.
#[component]
pub fn GroupChip(
    name: String,
    #[prop(into)] is_active: Signal<bool>,
    on_press: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="group-chip"
            class=("group-chip--active", move || is_active.get())
            on:click=move |_| on_press.run(())
        >
            {name}
        </button>
    }
}
