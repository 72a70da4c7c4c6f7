//! Navigation bar.
//!
//! Uses router `Link`s rather than plain anchors: a plain `href` reloads
//! the page, which would start a new session and drop the shared state.

use dioxus::prelude::*;

use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "dashboard")
    pub active: String,
}

#[component]
pub fn Nav(props: NavProps) -> Element {
    let nav_link_class = |page: &str| {
        if props.active == page {
            "contrast".to_string()
        } else {
            "secondary".to_string()
        }
    };

    rsx! {
        nav {
            ul {
                li {
                    Link { to: Route::Home {}, strong { "Video Scoring" } }
                }
            }
            ul {
                li {
                    Link { to: Route::Home {}, class: nav_link_class("home"), "Home" }
                }
                li {
                    Link { to: Route::InputForm {}, class: nav_link_class("input-form"), "New Video" }
                }
                li {
                    Link { to: Route::Dashboard {}, class: nav_link_class("dashboard"), "Dashboard" }
                }
            }
        }
    }
}
