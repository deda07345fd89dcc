//! Sign-up page: account creation followed by an automatic sign-in.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSessionManager;
use crate::net::api::Api;
use crate::state::session::SessionState;

/// Validated sign-up payload: trimmed name and email plus the password.
fn validate_sign_up_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid e-mail.");
    }
    if password.len() < 6 {
        return Err("The password must have at least 6 characters.");
    }
    if password != confirm {
        return Err("The password confirmation does not match.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

/// Sign-up page — registers the account, then signs in with the same
/// credentials. Bounces to `/` once a user is signed in.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();
    let manager = expect_context::<AppSessionManager>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().is_signed_in() {
            navigate("/", NavigateOptions::default());
        }
    });

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value, password_value) = match validate_sign_up_input(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
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
                if let Err(e) = api
                    .create_account(&name_value, &email_value, &password_value)
                    .await
                {
                    error.set(e.display_message("Unable to create the account. Try again later."));
                    busy.set(false);
                    return;
                }
                match manager.sign_in(&api, &email_value, &password_value).await {
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
            let _ = (&api, &manager, name_value, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <h1>"LiftLog"</h1>
                <p class="signin-card__subtitle">"Train your mind and body."</p>
                <h2>"Create your account"</h2>
                <form class="signin-form" on:submit=on_submit>
                    <input
                        class="signin-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <input
                        class="signin-input"
                        type="password"
                        placeholder="Confirm the password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create and access" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>
                <a class="btn btn--outline signin-card__back" href="/signin">
                    "Back to sign in"
                </a>
            </div>
        </div>
    }
}
