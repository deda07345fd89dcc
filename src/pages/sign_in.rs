//! Sign-in page exchanging email/password credentials for a session.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSessionManager;
use crate::net::api::Api;
use crate::state::session::SessionState;

/// Validate the sign-in form; returns trimmed email plus the password.
fn validate_credentials_input(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your e-mail.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Sign-in page — submits credentials through the session manager.
/// Bounces to `/` once a user is signed in.
#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();
    let manager = expect_context::<AppSessionManager>();
    let navigate = use_navigate();

    // Signed in already (or restored meanwhile): go home.
    Effect::new(move || {
        if session.get().is_signed_in() {
            navigate("/", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "web")]
        {
            let api = api.clone();
            let manager = manager.clone();
            leptos::task::spawn_local(async move {
                match manager.sign_in(&api, &email_value, &password_value).await {
                    // The redirect effect takes over; the busy flag stays set
                    // until this page unmounts.
                    Ok(user) => session.update(|s| s.set_user(user)),
                    Err(e) => {
                        error.set(e.display_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (&api, &manager, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <h1>"LiftLog"</h1>
                <p class="signin-card__subtitle">"Train your mind and body."</p>
                <h2>"Access your account"</h2>
                <form class="signin-form" on:submit=on_submit>
                    <input
                        class="signin-input"
                        type="email"
                        placeholder="E-mail"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="signin-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>
                <div class="signin-card__footer">
                    <p>"New around here?"</p>
                    <a class="btn btn--outline" href="/signup">"Create account"</a>
                </div>
            </div>
        </div>
    }
}
