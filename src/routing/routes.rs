//! Static route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Per-route flags the guard reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Only reachable with a session token.
    pub requires_auth: bool,
    /// Reachable without a session token.
    pub public: bool,
}

/// One entry of the route table. Defined once, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    /// Unconditional redirect target, for alias-style entries.
    pub redirect_to: Option<&'static str>,
    pub meta: RouteMeta,
}

/// `/`: bare origin, always forwarded to the login page.
pub static ROOT: RouteDescriptor = RouteDescriptor {
    path: "/",
    name: "root",
    redirect_to: Some("/login"),
    meta: RouteMeta { requires_auth: false, public: false },
};

/// `/login`: credentials form.
pub static LOGIN: RouteDescriptor = RouteDescriptor {
    path: "/login",
    name: "login",
    redirect_to: None,
    meta: RouteMeta { requires_auth: false, public: true },
};

/// `/chat`: authenticated landing page.
pub static CHAT: RouteDescriptor = RouteDescriptor {
    path: "/chat",
    name: "chat",
    redirect_to: None,
    meta: RouteMeta { requires_auth: true, public: false },
};

/// The whole table, in matching order.
pub static ROUTES: [&RouteDescriptor; 3] = [&ROOT, &LOGIN, &CHAT];

/// Look up a route by exact path.
pub fn find(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.path == path).copied()
}
