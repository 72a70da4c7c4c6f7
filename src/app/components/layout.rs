//! Page chrome shared by every screen.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::app::state::use_shared_state;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

/// Additions on top of Pico's defaults.
const APP_STYLES: &str = r#"
.status-err { color: var(--pico-del-color); }
.score-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; }
.score-total { font-size: 2rem; font-weight: 700; }
.criteria-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 0.5rem 1rem; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Heading of the page, also used for the browser tab
    pub title: String,
    /// One-line description under the heading
    #[props(default)]
    pub lead: Option<String>,
    /// Nav entry to highlight ("home", "input-form", "dashboard"); empty for none
    pub nav_active: String,
    pub children: Element,
}

#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let shared = use_shared_state();
    let scored = shared.with(|s| s.results.len());
    let in_flight = shared.with(|s| s.pending.is_some());

    let session_note = match (scored, in_flight) {
        (0, false) => "Nothing scored yet this session".to_string(),
        (n, false) => format!("{n} video(s) scored this session"),
        (n, true) => format!("{n} video(s) scored this session, one in progress"),
    };

    rsx! {
        document::Title { "{props.title} | Video Scoring" }
        document::Link { rel: "stylesheet", href: PICO_CSS }
        document::Style { {APP_STYLES} }

        header { class: "container",
            Nav { active: props.nav_active.clone() }
        }
        main { class: "container",
            hgroup {
                h1 { "{props.title}" }
                if let Some(lead) = &props.lead {
                    p { "{lead}" }
                }
            }
            {props.children}
        }
        footer { class: "container",
            small { "{session_note}" }
        }
    }
}
