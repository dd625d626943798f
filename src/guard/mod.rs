//! Navigation access guard.
//!
//! On every route change the guard classifies the target path and combines
//! it with session-marker presence into a [`Decision`]. Session presence is
//! handed in by the caller (the owner of the session vault); the guard never
//! reads ambient state and never performs network calls, so it cannot fail.

use crate::routing::{self, RouteClass};
use tracing::debug;

/// Outcome of evaluating a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested route.
    Admit,
    /// Replace the pending render with a navigation to the given route.
    RedirectTo(&'static str),
}

/// Evaluate a navigation target against session presence.
///
/// A protected route without a session redirects to the login page; a public
/// route with a session redirects home (an authenticated viewer has no
/// business on the login screen). Everything else is admitted.
pub fn evaluate(path: &str, session_present: bool) -> Decision {
    let decision = match (routing::classify(path), session_present) {
        (RouteClass::Protected, false) => Decision::RedirectTo(routing::LOGIN),
        (RouteClass::Public, true) => Decision::RedirectTo(routing::HOME),
        (RouteClass::Protected, true) | (RouteClass::Public, false) => Decision::Admit,
    };
    debug!(
        "guard: path={} session_present={} -> {:?}",
        path, session_present, decision
    );
    decision
}

/// Per-navigation guard state: `Pending` until the decision is computed,
/// then terminally `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Pending,
    Resolved(Decision),
}

/// Tracks the guard decision for a single navigation.
///
/// A fresh instance is created on every route change; decisions are never
/// memoized across navigations because the session marker can change between
/// them (e.g. after logout).
#[derive(Debug)]
pub struct NavigationGuard {
    state: GuardState,
}

impl NavigationGuard {
    pub fn begin() -> Self {
        Self {
            state: GuardState::Pending,
        }
    }

    /// Compute the decision for this navigation. The first call resolves the
    /// state; later calls return the stored decision unchanged.
    pub fn resolve(&mut self, path: &str, session_present: bool) -> Decision {
        match self.state {
            GuardState::Resolved(decision) => decision,
            GuardState::Pending => {
                let decision = evaluate(path, session_present);
                self.state = GuardState::Resolved(decision);
                decision
            }
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// True only once the navigation resolved to `Admit`. While the decision
    /// is pending or a redirect is in flight, the presentation layer must
    /// render nothing.
    pub fn should_render(&self) -> bool {
        matches!(self.state, GuardState::Resolved(Decision::Admit))
    }
}
