//! Route table for the console's pages.
//!
//! Route classification is static for the process lifetime: a path is public
//! when it matches one of the fixed public prefixes, protected otherwise.

/// Login page. The only destination the guard redirects unauthenticated
/// viewers to.
pub const LOGIN: &str = "/login";

/// Home page (the dashboard). Authenticated viewers landing on a public
/// route are sent here.
pub const HOME: &str = "/";

/// Job card list view. Submit navigates here on success.
pub const JOB_CARDS: &str = "/job-cards";

/// Path prefixes reachable without a session. Everything else is protected.
pub const PUBLIC_PATH_PREFIXES: &[&str] = &[LOGIN];

/// Detail/review page for a job card (workflow step 1).
pub fn job_card_detail(id: &str) -> String {
    format!("{}/{}", JOB_CARDS, id)
}

/// Edit page for a job card (workflow step 2).
pub fn job_card_edit(id: &str) -> String {
    format!("{}/{}/edit", JOB_CARDS, id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Protected,
}

/// Classify a path by prefix match against [`PUBLIC_PATH_PREFIXES`].
pub fn classify(path: &str) -> RouteClass {
    if PUBLIC_PATH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        RouteClass::Public
    } else {
        RouteClass::Protected
    }
}
