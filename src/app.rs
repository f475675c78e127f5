use std::cell::Cell;

use crate::api::{Navigator, HOME_PATH};

/// Screens of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Questionnaire,
    Recommendations,
}

impl View {
    pub fn path(self) -> &'static str {
        match self {
            View::Landing => HOME_PATH,
            View::Questionnaire => "/questionnaire",
            View::Recommendations => "/recommendations",
        }
    }

    pub fn from_path(path: &str) -> Option<View> {
        [View::Landing, View::Questionnaire, View::Recommendations]
            .into_iter()
            .find(|v| v.path() == path)
    }
}

/// Tracks the current screen. Forced navigations (a rejected session)
/// land here through `Navigator`.
#[derive(Debug)]
pub struct ViewRouter {
    current: Cell<View>,
    forced: Cell<usize>,
    pending: Cell<bool>,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            current: Cell::new(View::Landing),
            forced: Cell::new(0),
            pending: Cell::new(false),
        }
    }

    pub fn current(&self) -> View {
        self.current.get()
    }

    pub fn go(&self, view: View) {
        tracing::debug!(path = view.path(), "Navigating");
        self.current.set(view);
    }

    /// How many navigations were forced from outside the normal flow.
    pub fn forced_navigations(&self) -> usize {
        self.forced.get()
    }

    /// Check and reset whether a forced navigation happened since the last call.
    pub fn take_forced(&self) -> bool {
        self.pending.replace(false)
    }
}

impl Navigator for ViewRouter {
    fn navigate(&self, path: &str) {
        let view = View::from_path(path).unwrap_or(View::Landing);
        self.forced.set(self.forced.get() + 1);
        self.pending.set(true);
        self.go(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for view in [View::Landing, View::Questionnaire, View::Recommendations] {
            assert_eq!(View::from_path(view.path()), Some(view));
        }
        assert_eq!(View::from_path("/admin"), None);
    }

    #[test]
    fn test_forced_navigation_returns_home() {
        let router = ViewRouter::new();
        router.go(View::Recommendations);
        router.navigate("/");
        assert_eq!(router.current(), View::Landing);
        assert_eq!(router.forced_navigations(), 1);
        assert!(router.take_forced());
        assert!(!router.take_forced());
    }

    #[test]
    fn test_unknown_path_lands_home() {
        let router = ViewRouter::new();
        router.go(View::Questionnaire);
        router.navigate("/nowhere");
        assert_eq!(router.current(), View::Landing);
    }
}
