//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::credentials::Credentials;
use crate::auth::manager::SessionManager;
use crate::net::api::{Api, DEFAULT_BASE_URL};
use crate::pages::{
    exercise::ExercisePage, history::HistoryPage, home::HomePage, profile::ProfilePage,
    sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::state::session::SessionState;
use crate::storage::local::LocalStore;

/// Session manager wired to browser storage, shared via context.
pub type AppSessionManager = SessionManager<LocalStore>;

/// Root application component.
///
/// Provides the session state, the API client, and the session manager, then
/// runs the one-shot session restore before routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    let credentials = Credentials::new();
    let api = Api::new(DEFAULT_BASE_URL, credentials.clone());
    let manager = AppSessionManager::new(LocalStore::new(), credentials);
    provide_context(api);
    provide_context(manager.clone());

    // One-shot restore; `finish_restore` settles the flag on every path.
    let restored = manager.restore();
    session.update(|s| s.finish_restore(restored));

    view! {
        <Title text="LiftLog"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("exercise"), ParamSegment("id")) view=ExercisePage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
