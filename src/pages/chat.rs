//! Authenticated chat landing page.
//!
//! Reachable only through the guard, so a session is always present when
//! this renders. The page itself stays a shell: identity header plus a
//! logout control over an empty message surface.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::routes;
use crate::state::auth::AuthStore;

#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let state = auth.state();
    let navigate = use_navigate();

    let display_name = move || {
        state.with(|state| {
            state
                .user
                .as_ref()
                .and_then(|user| user.name.clone().or_else(|| user.email.clone()))
                .unwrap_or_else(|| "Signed in".to_owned())
        })
    };

    let on_logout = move |_| {
        auth.logout();
        navigate(routes::LOGIN.path, NavigateOptions::default());
    };

    view! {
        <div class="chat-page">
            <header class="chat-header">
                <h1>"Chat"</h1>
                <div class="chat-header__session">
                    <span class="chat-header__user">{display_name}</span>
                    <button class="chat-header__logout" on:click=on_logout>
                        "Sign Out"
                    </button>
                </div>
            </header>
            <main class="chat-messages"></main>
        </div>
    }
}
