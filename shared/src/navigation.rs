//! The navigation capability injected into every landing component.

use std::cell::RefCell;

use crate::routes::NavigationAction;

/// Router and viewport collaborator.
///
/// Both calls are fire-and-forget: implementations swallow their own
/// failures, callers never observe them.
pub trait Navigator {
    /// Request a client-side route change. The path is opaque to callers.
    fn navigate_to(&self, path: &str);

    /// Request the viewport be scrolled to the top, smoothly if supported.
    fn scroll_to_top(&self);
}

/// Navigate for `action`, then scroll to the top. Exactly one request of
/// each kind, in that order.
pub fn dispatch(navigator: &dyn Navigator, action: &NavigationAction) {
    let path = action.path();
    tracing::debug!(?action, %path, "dispatching navigation");
    navigator.navigate_to(&path);
    navigator.scroll_to_top();
}

/// A request observed by [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    /// `navigate_to(path)`.
    Navigate(String),
    /// `scroll_to_top()`.
    ScrollToTop,
}

/// In-memory navigator that records every request in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    requests: RefCell<Vec<NavigationRequest>>,
}

impl RecordingNavigator {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests.borrow().clone()
    }

    /// Drain the recorded requests.
    pub fn take(&self) -> Vec<NavigationRequest> {
        self.requests.take()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.requests
            .borrow_mut()
            .push(NavigationRequest::Navigate(path.to_string()));
    }

    fn scroll_to_top(&self) {
        self.requests.borrow_mut().push(NavigationRequest::ScrollToTop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_drains_the_log() {
        let navigator = RecordingNavigator::new();
        dispatch(&navigator, &NavigationAction::BrowseAll);
        assert_eq!(navigator.take().len(), 2);
        assert!(navigator.requests().is_empty());
    }
}
