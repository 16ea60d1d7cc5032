//! Root application component with routing, context providers, and the
//! navigation guard wired over the route table.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config;
use crate::net::http::HttpClient;
use crate::pages::{chat::ChatPage, login::LoginPage};
use crate::routing::guard::{self, Decision};
use crate::routing::routes::{self, RouteDescriptor};
use crate::session::SessionStore;
use crate::state::auth::AuthStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store, the shared HTTP client, and the auth store, and
/// provides them as contexts before mounting the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::browser();
    let http = Arc::new(HttpClient::new(config::API_BASE_URL, session.clone()));
    let auth = AuthStore::new(http, session.clone());
    auth.initialize();

    provide_context(session);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-client.css"/>
        <Title text="Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| guarded(&routes::ROOT, || ())/>
                <Route path=StaticSegment("login") view=|| guarded(&routes::LOGIN, LoginPage)/>
                <Route path=StaticSegment("chat") view=|| guarded(&routes::CHAT, ChatPage)/>
            </Routes>
        </Router>
    }
}

/// Run the navigation guard for `route`, rendering either the page or a
/// redirect. Alias-style routes short-circuit to their fixed target.
fn guarded<V, F>(route: &'static RouteDescriptor, page: F) -> AnyView
where
    F: Fn() -> V,
    V: IntoView + 'static,
{
    if let Some(target) = route.redirect_to {
        return view! { <Redirect path=target/> }.into_any();
    }
    let session = expect_context::<SessionStore>();
    let decision = guard::evaluate(route, session.token().as_deref());
    leptos::logging::log!("guard: {} -> {decision:?}", route.path);
    match decision {
        Decision::Proceed => page().into_any(),
        Decision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
