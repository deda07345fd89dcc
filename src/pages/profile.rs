//! Profile page showing the signed-in user's account details.
//!
//! The backend has no profile-update endpoint; the fields render the stored
//! profile read-only.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::screen_header::ScreenHeader;
use crate::components::tab_bar::TabBar;
use crate::net::api::Api;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Profile page — avatar, name, and email of the current user.
/// Redirects to `/signin` if no user is signed in.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let avatar_api = api.clone();
    let avatar = move || {
        session
            .get()
            .user
            .and_then(|u| u.avatar)
            .map(|file| avatar_api.avatar_url(&file))
    };
    let name = move || session.get().user.map(|u| u.name).unwrap_or_default();
    let email = move || session.get().user.map(|u| u.email).unwrap_or_default();

    view! {
        <div class="profile-page">
            <ScreenHeader title="Profile"/>

            <div class="profile-page__body">
                {move || match avatar() {
                    Some(src) => view! {
                        <img class="profile-page__avatar" src=src alt="Avatar"/>
                    }
                        .into_any(),
                    None => view! {
                        <div class="profile-page__avatar profile-page__avatar--empty"></div>
                    }
                        .into_any(),
                }}

                <label class="profile-field">
                    "Name"
                    <input class="profile-field__input" type="text" readonly prop:value=name/>
                </label>
                <label class="profile-field">
                    "E-mail"
                    <input class="profile-field__input" type="email" readonly prop:value=email/>
                </label>
            </div>

            <TabBar active="profile"/>
        </div>
    }
}
