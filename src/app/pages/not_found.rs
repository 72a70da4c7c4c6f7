//! Fallback for paths no route declares.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("No route for {}", path);

    rsx! {
        Layout {
            title: "Page not found".to_string(),
            nav_active: String::new(),
            article {
                p { "Nothing lives at " code { "{path}" } "." }
                Link { to: Route::Home {}, "Back to home" }
            }
        }
    }
}
