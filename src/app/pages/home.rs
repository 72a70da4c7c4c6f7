//! Home page component.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::state::use_shared_state;
use crate::app::Route;

#[component]
pub fn Home() -> Element {
    let shared = use_shared_state();
    let latest = shared.latest();
    let scored_count = shared.with(|s| s.results.len());
    let latest_total = latest
        .as_ref()
        .map(|r| format!("{:.1}", r.scoring.total_score))
        .unwrap_or_default();

    rsx! {
        Layout {
            title: "Video Scoring".to_string(),
            lead: "Generate a product video from a creative brief and see how it scores against your criteria.".to_string(),
            nav_active: "home".to_string(),

            article {
                p { "Describe the product, its brand palette and call to action, then weight what matters most. "
                    "The finished video is scored on six criteria with a justification for each." }
                Link { to: Route::InputForm {}, class: "contrast", "Create a video" }
            }

            if let Some(latest) = latest {
                article {
                    header { "This session" }
                    p { "{scored_count} video(s) scored so far. The latest total is {latest_total}." }
                    Link {
                        to: Route::DashboardDetail { id: latest.identifier.clone() },
                        "View latest result"
                    }
                }
            }
        }
    }
}
