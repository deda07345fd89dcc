//! Greeting header with avatar and sign-out for the home page.

use leptos::prelude::*;

use crate::app::AppSessionManager;
use crate::net::api::Api;
use crate::state::session::SessionState;

/// Home greeting bar: avatar, welcome text, sign-out action.
#[component]
pub fn HomeHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let manager = expect_context::<AppSessionManager>();
    let api = expect_context::<Api>();

    let name = move || {
        session
            .get()
            .user
            .map_or_else(|| "athlete".to_owned(), |u| u.name)
    };
    let avatar = move || {
        session
            .get()
            .user
            .and_then(|u| u.avatar)
            .map(|file| api.avatar_url(&file))
    };

    let on_sign_out = move |_| {
        manager.sign_out();
        session.update(SessionState::clear);
    };

    view! {
        <header class="home-header">
            {move || match avatar() {
                Some(src) => view! { <img class="home-header__avatar" src=src alt="Avatar"/> }
                    .into_any(),
                None => view! { <div class="home-header__avatar home-header__avatar--empty"></div> }
                    .into_any(),
            }}
            <div class="home-header__greeting">
                <span>"Hello,"</span>
                <strong>{name}</strong>
            </div>
            <button class="home-header__sign-out" on:click=on_sign_out title="Sign out">
                "Sign out"
            </button>
        </header>
    }
}
