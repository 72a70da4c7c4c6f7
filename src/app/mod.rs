//! Dioxus application entry point.
//!
//! [`App`] installs the session's shared state and mounts the router; every
//! screen rendered by the router sits beneath the provider.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod form;
pub mod pages;
pub mod state;

use pages::{Dashboard, DashboardDetail, Home, InputForm, NotFound};
use state::use_shared_state_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Shared state lives at the root so it outlives every route change
    use_shared_state_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
///
/// `/dashboard` and `/dashboard/:id` differ only in segment count, so at
/// most one of them ever matches. Anything undeclared lands on `NotFound`.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/input-form")]
    InputForm {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/dashboard/:id")]
    DashboardDetail { id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// The screen a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    InputForm,
    DashboardCollection,
    DashboardDetail,
    NotFound,
}

impl Route {
    /// Resolve a path to its route. Never fails: unknown paths become
    /// [`Route::NotFound`]. An empty path is the home page.
    pub fn resolve(path: &str) -> Route {
        let path = if path.trim().is_empty() { "/" } else { path };
        path.parse().unwrap_or_else(|_| Route::NotFound {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }

    pub fn screen(&self) -> Screen {
        match self {
            Route::Home {} => Screen::Home,
            Route::InputForm {} => Screen::InputForm,
            Route::Dashboard {} => Screen::DashboardCollection,
            Route::DashboardDetail { .. } => Screen::DashboardDetail,
            Route::NotFound { .. } => Screen::NotFound,
        }
    }

    /// The `:id` parameter, present only on the detail route.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            Route::DashboardDetail { id } => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::Mutation;
    use dioxus::history::{History, MemoryHistory};
    use dioxus::router::root_router;
    use scoring_types::VideoResponse;
    use state::SharedContext;
    use std::rc::Rc;

    fn text_nodes(edits: &[Mutation]) -> Vec<String> {
        edits
            .iter()
            .filter_map(|m| match m {
                Mutation::CreateTextNode { value, .. } => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_result_recorded_on_form_is_shown_on_dashboard_after_navigation() {
        let history = Rc::new(MemoryHistory::with_initial_path("/input-form"));
        let mut dom = VirtualDom::new(App).with_root_context(history.clone() as Rc<dyn History>);
        dom.rebuild_in_place();

        let router = dom
            .in_runtime(root_router)
            .expect("App mounts a router");
        let current = dom.in_scope(ScopeId::APP, || router.current::<Route>());
        assert_eq!(current, Route::InputForm {});

        // Write through the same handle every screen gets from the provider
        let shared = dom.in_scope(ScopeId::APP, consume_context::<SharedContext>);
        let mut response = VideoResponse {
            status: "success".to_string(),
            identifier: "abc".to_string(),
            ..Default::default()
        };
        response.scoring.total_score = 42.5;
        dom.in_scope(ScopeId::APP, || shared.record_result(response));

        dom.in_scope(ScopeId::APP, || router.push(Route::Dashboard {}));
        let edits = dom.render_immediate_to_vec().edits;

        assert_eq!(history.current_route(), "/dashboard");
        let current = dom.in_scope(ScopeId::APP, || router.current::<Route>());
        assert_eq!(current, Route::Dashboard {});
        assert!(
            text_nodes(&edits).iter().any(|t| t == "42.5"),
            "dashboard should render the recorded total, got {:?}",
            text_nodes(&edits)
        );
        assert!(text_nodes(&edits)
            .iter()
            .any(|t| t == "1 video(s) scored this session"));
        assert_eq!(dom.in_scope(ScopeId::APP, || shared.results().len()), 1);
    }

    #[test]
    fn test_new_app_session_starts_with_empty_state() {
        let history = Rc::new(MemoryHistory::with_initial_path("/dashboard"));
        let mut dom = VirtualDom::new(App).with_root_context(history as Rc<dyn History>);
        dom.rebuild_in_place();

        let shared = dom.in_scope(ScopeId::APP, consume_context::<SharedContext>);
        let results = dom.in_scope(ScopeId::APP, || shared.results());
        assert!(results.is_empty());
    }

    #[test]
    fn test_layout_renders_heading_and_session_footer() {
        let history = Rc::new(MemoryHistory::with_initial_path("/dashboard"));
        let mut dom = VirtualDom::new(App).with_root_context(history as Rc<dyn History>);
        let texts = text_nodes(&dom.rebuild_to_vec().edits);

        assert!(texts.iter().any(|t| t == "Dashboard"), "got {texts:?}");
        assert!(
            texts.iter().any(|t| t == "Videos scored in this session, newest first."),
            "got {texts:?}"
        );
        assert!(
            texts.iter().any(|t| t == "Nothing scored yet this session"),
            "got {texts:?}"
        );
    }

    #[test]
    fn test_declared_paths_resolve_to_their_screen() {
        let cases = [
            ("", Screen::Home),
            ("/", Screen::Home),
            ("/input-form", Screen::InputForm),
            ("/dashboard", Screen::DashboardCollection),
            ("/dashboard/abc", Screen::DashboardDetail),
        ];
        for (path, screen) in cases {
            assert_eq!(Route::resolve(path).screen(), screen, "path {path}");
        }
    }

    #[test]
    fn test_detail_route_extracts_id() {
        let route = Route::resolve("/dashboard/abc");
        assert_eq!(
            route,
            Route::DashboardDetail {
                id: "abc".to_string()
            }
        );
        assert_eq!(route.item_id(), Some("abc"));
    }

    #[test]
    fn test_collection_route_has_no_id() {
        let route = Route::resolve("/dashboard");
        assert_eq!(route, Route::Dashboard {});
        assert_eq!(route.item_id(), None);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = Route::resolve("/unknown");
        assert_eq!(route.screen(), Screen::NotFound);
        assert_eq!(route.item_id(), None);
        assert!(matches!(route, Route::NotFound { ref segments } if segments == &["unknown"]));
    }

    #[test]
    fn test_extra_segment_is_not_a_detail_view() {
        let route = Route::resolve("/dashboard/abc/extra");
        assert_eq!(route.screen(), Screen::NotFound);
    }

    #[test]
    fn test_routes_display_as_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::InputForm {}.to_string(), "/input-form");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(
            Route::DashboardDetail {
                id: "abc".to_string()
            }
            .to_string(),
            "/dashboard/abc"
        );
    }
}
