//! Session-wide shared state.
//!
//! One [`SharedState`] is created when the app boots and handed to every
//! screen through Dioxus context. Screens never hold their own copy: they
//! read and write through the [`SharedContext`] handle, so anything the
//! input form records is visible to the dashboard after navigation without
//! another request. Nothing is persisted; a reload starts a fresh session.

use dioxus::prelude::*;
use scoring_types::{VideoRequest, VideoResponse};

use super::form::VideoForm;

/// Data shared between screens for the lifetime of the page session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedState {
    /// In-progress input form values
    pub draft: VideoForm,
    /// Request sent to the backend and not yet answered
    pub pending: Option<VideoRequest>,
    /// Scored videos seen this session, oldest first, unique by identifier
    pub results: Vec<VideoResponse>,
    /// Last submission failure, shown on the form
    pub last_error: Option<String>,
    /// Local keys handed out to results the backend sent without an identifier
    unkeyed: u32,
}

impl SharedState {
    /// Mark a request as in flight.
    pub fn record_submission(&mut self, request: VideoRequest) {
        self.pending = Some(request);
        self.last_error = None;
    }

    /// Store a scored video and return its identifier.
    ///
    /// A response whose identifier is already known replaces the earlier
    /// entry in place, keeping its position. A response without one is
    /// given a `local-N` key unique within the session.
    pub fn record_result(&mut self, mut response: VideoResponse) -> String {
        if response.identifier.is_empty() {
            self.unkeyed += 1;
            response.identifier = format!("local-{}", self.unkeyed);
        }
        let id = response.identifier.clone();
        self.pending = None;

        match self.results.iter_mut().find(|r| r.identifier == id) {
            Some(existing) => *existing = response,
            None => self.results.push(response),
        }
        id
    }

    /// Clear the in-flight request and remember why it failed.
    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.pending = None;
        self.last_error = Some(message.into());
    }

    pub fn result(&self, id: &str) -> Option<&VideoResponse> {
        self.results.iter().find(|r| r.identifier == id)
    }

    /// Most recently added result
    pub fn latest(&self) -> Option<&VideoResponse> {
        self.results.last()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Handle to the session's [`SharedState`].
///
/// Cheap to copy; every copy points at the same state. Reads made while a
/// component renders subscribe that component to later writes.
#[derive(Clone, Copy, PartialEq)]
pub struct SharedContext {
    state: Signal<SharedState>,
}

impl SharedContext {
    /// Run `f` against the current state.
    pub fn with<R>(&self, f: impl FnOnce(&SharedState) -> R) -> R {
        let state = self.state.read();
        f(&state)
    }

    /// Run `f` with mutable access. The write is applied before this returns.
    pub fn update<R>(&self, f: impl FnOnce(&mut SharedState) -> R) -> R {
        let mut signal = self.state;
        let mut state = signal.write();
        f(&mut state)
    }

    pub fn draft(&self) -> VideoForm {
        self.with(|s| s.draft.clone())
    }

    pub fn update_draft(&self, f: impl FnOnce(&mut VideoForm)) {
        self.update(|s| f(&mut s.draft));
    }

    pub fn pending(&self) -> Option<VideoRequest> {
        self.with(|s| s.pending.clone())
    }

    pub fn last_error(&self) -> Option<String> {
        self.with(|s| s.last_error.clone())
    }

    pub fn record_submission(&self, request: VideoRequest) {
        self.update(|s| s.record_submission(request));
    }

    pub fn record_result(&self, response: VideoResponse) -> String {
        let id = self.update(|s| s.record_result(response));
        tracing::debug!("Recorded scored video {}", id);
        id
    }

    pub fn record_failure(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("Submission failed: {}", message);
        self.update(|s| s.record_failure(message));
    }

    pub fn result(&self, id: &str) -> Option<VideoResponse> {
        self.with(|s| s.result(id).cloned())
    }

    pub fn results(&self) -> Vec<VideoResponse> {
        self.with(|s| s.results.clone())
    }

    pub fn latest(&self) -> Option<VideoResponse> {
        self.with(|s| s.latest().cloned())
    }

    pub fn reset(&self) {
        self.update(SharedState::reset);
    }
}

/// Create the session's shared state. Call once, at the app root.
pub fn use_shared_state_provider() -> SharedContext {
    use_context_provider(|| {
        tracing::debug!("Shared state initialised");
        SharedContext {
            state: Signal::new(SharedState::default()),
        }
    })
}

/// Get the shared state handle from any component below the provider.
pub fn use_shared_state() -> SharedContext {
    use_context::<SharedContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scored(id: &str, total: f64) -> VideoResponse {
        let mut response = VideoResponse {
            status: "success".to_string(),
            video_url: format!("https://example.com/{id}.mp4"),
            identifier: id.to_string(),
            ..Default::default()
        };
        response.scoring.total_score = total;
        response
    }

    #[test]
    fn test_default_state_is_empty() {
        let state = SharedState::default();
        assert!(state.results.is_empty());
        assert!(state.pending.is_none());
        assert!(state.last_error.is_none());
        assert_eq!(state.draft, VideoForm::default());
    }

    #[test]
    fn test_submission_then_result() {
        let mut state = SharedState::default();
        state.last_error = Some("previous failure".to_string());

        state.record_submission(VideoRequest::default());
        assert!(state.pending.is_some());
        assert!(state.last_error.is_none());

        let id = state.record_result(scored("abc", 40.0));
        assert_eq!(id, "abc");
        assert!(state.pending.is_none());
        assert_eq!(state.result("abc").unwrap().scoring.total_score, 40.0);
        assert!(state.result("missing").is_none());
    }

    #[test]
    fn test_record_result_replaces_same_identifier() {
        let mut state = SharedState::default();
        state.record_result(scored("a", 10.0));
        state.record_result(scored("b", 20.0));
        state.record_result(scored("a", 30.0));

        let ids: Vec<_> = state.results.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(state.result("a").unwrap().scoring.total_score, 30.0);
        assert_eq!(state.latest().unwrap().identifier, "b");
    }

    #[test]
    fn test_results_without_identifier_are_kept_apart() {
        let mut state = SharedState::default();
        let first = state.record_result(scored("", 10.0));
        let second = state.record_result(scored("", 20.0));

        assert_eq!(first, "local-1");
        assert_eq!(second, "local-2");
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.result("local-1").unwrap().scoring.total_score, 10.0);
        assert_eq!(state.result("local-2").unwrap().scoring.total_score, 20.0);

        // The detail route for a local key resolves to the detail screen
        let route = crate::app::Route::DashboardDetail { id: second };
        assert_eq!(
            crate::app::Route::resolve(&route.to_string()).item_id(),
            Some("local-2")
        );
    }

    #[test]
    fn test_failure_clears_pending() {
        let mut state = SharedState::default();
        state.record_submission(VideoRequest::default());
        state.record_failure("server returned 500: boom");

        assert!(state.pending.is_none());
        assert_eq!(state.last_error.as_deref(), Some("server returned 500: boom"));
    }

    #[test]
    fn test_reset() {
        let mut state = SharedState::default();
        state.draft.product_name = "GlowMax Cream".to_string();
        state.record_result(scored("a", 1.0));
        state.reset();
        assert_eq!(state, SharedState::default());
    }

    /// What the dashboard stand-in read for "abc", once per mount.
    #[derive(Clone, Default)]
    struct Seen(Rc<RefCell<Vec<Option<String>>>>);

    #[component]
    fn FormScreen() -> Element {
        let shared = use_shared_state();
        use_hook(|| {
            shared.update_draft(|d| d.product_name = "AquaPure Water".to_string());
            shared.record_result(scored("abc", 42.0));
        });
        rsx! { "form" }
    }

    #[component]
    fn DashboardScreen() -> Element {
        let shared = use_shared_state();
        let log = use_context::<Seen>();
        use_hook(|| {
            let url = shared.result("abc").map(|r| r.video_url);
            log.0.borrow_mut().push(url);
        });
        rsx! { "dashboard" }
    }

    fn session_with_form(seen: Seen) -> Element {
        use_shared_state_provider();
        use_context_provider(|| seen.clone());
        rsx! {
            FormScreen {}
            DashboardScreen {}
        }
    }

    fn session_without_form(seen: Seen) -> Element {
        use_shared_state_provider();
        use_context_provider(|| seen.clone());
        rsx! {
            DashboardScreen {}
        }
    }

    #[test]
    fn test_write_on_one_screen_is_read_on_another() {
        let seen = Seen::default();
        let mut dom = VirtualDom::new_with_props(session_with_form, seen.clone());
        dom.rebuild_in_place();

        assert_eq!(
            *seen.0.borrow(),
            vec![Some("https://example.com/abc.mp4".to_string())]
        );
    }

    #[test]
    fn test_new_session_starts_empty() {
        let first = Seen::default();
        let mut dom = VirtualDom::new_with_props(session_with_form, first.clone());
        dom.rebuild_in_place();
        drop(dom);

        let second = Seen::default();
        let mut dom = VirtualDom::new_with_props(session_without_form, second.clone());
        dom.rebuild_in_place();

        assert_eq!(*second.0.borrow(), vec![None]);
    }
}
