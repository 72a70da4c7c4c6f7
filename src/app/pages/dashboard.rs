//! Dashboard page components.
//!
//! `/dashboard` lists every video scored this session; `/dashboard/:id`
//! shows one. The detail view reads shared state first and only asks the
//! backend for identifiers this session has not seen (e.g. a link opened
//! from the notification email).

use dioxus::prelude::*;
use scoring_types::VideoResponse;

use crate::app::api;
use crate::app::components::Layout;
use crate::app::state::use_shared_state;
use crate::app::Route;

/// Collection view.
#[component]
pub fn Dashboard() -> Element {
    let shared = use_shared_state();
    let results = shared.results();
    let pending = shared.pending();
    let last_error = shared.last_error();

    let nothing_yet = results.is_empty() && pending.is_none() && last_error.is_none();

    rsx! {
        Layout {
            title: "Dashboard".to_string(),
            lead: "Videos scored in this session, newest first.".to_string(),
            nav_active: "dashboard".to_string(),

            if let Some(request) = pending {
                article { aria_busy: "true",
                    "Generating and scoring \"{request.video_details.product_name}\"..."
                }
            }

            if let Some(err) = last_error {
                article {
                    p { class: "status-err", "Submission failed: {err}" }
                    Link { to: Route::InputForm {}, "Back to the form" }
                }
            }

            if nothing_yet {
                article {
                    p { "No videos scored in this session yet." }
                    Link { to: Route::InputForm {}, "Create one" }
                }
            } else {
                section { class: "score-grid",
                    // Newest first
                    for response in results.into_iter().rev() {
                        ResultCard { key: "{response.identifier}", response: response.clone() }
                    }
                }
            }
        }
    }
}

/// Summary card linking to the detail view.
#[component]
fn ResultCard(response: VideoResponse) -> Element {
    let total = format!("{:.1}", response.scoring.total_score);
    let resolution = response.metadata.resolution;

    rsx! {
        article {
            header {
                span { class: "score-total", "{total}" }
                small { " total score" }
            }
            p {
                small {
                    "{resolution.width}×{resolution.height} · {response.metadata.duration_seconds}s · {response.metadata.file_size_mb} MB"
                }
            }
            Link {
                to: Route::DashboardDetail { id: response.identifier.clone() },
                "View breakdown"
            }
        }
    }
}

/// Detail view for `/dashboard/:id`.
#[component]
pub fn DashboardDetail(id: String) -> Element {
    rsx! {
        Layout {
            title: "Scored Video".to_string(),
            nav_active: "dashboard".to_string(),

            // Keyed so a different id remounts and refetches
            ScoredVideo { key: "{id}", id: id.clone() }
        }
    }
}

#[component]
fn ScoredVideo(id: String) -> Element {
    let shared = use_shared_state();
    let cached = shared.result(&id);

    // Decided once per mount; a cache hit never touches the network
    let needs_fetch = use_hook(|| cached.is_none());
    let fetched = use_resource({
        let id = id.clone();
        move || {
            let id = id.clone();
            async move {
                if !needs_fetch {
                    return None;
                }
                let result = api::fetch_scored_video(&id).await.map(|mut response| {
                    if response.identifier.is_empty() {
                        response.identifier = id.clone();
                    }
                    shared.record_result(response.clone());
                    response
                });
                Some(result)
            }
        }
    });

    let content = if let Some(response) = cached {
        rsx! { ScoreReport { response: response } }
    } else {
        match &*fetched.read() {
            Some(Some(Ok(response))) => rsx! { ScoreReport { response: response.clone() } },
            Some(Some(Err(e))) if e.is_not_found() => rsx! {
                article {
                    p { "No scored video with identifier " code { "{id}" } "." }
                    Link { to: Route::Dashboard {}, "Back to dashboard" }
                }
            },
            Some(Some(Err(e))) => rsx! {
                article {
                    p { class: "status-err", "Could not load this video: {e}" }
                    Link { to: Route::Dashboard {}, "Back to dashboard" }
                }
            },
            _ => rsx! {
                article { aria_busy: "true", "Loading scored video..." }
            },
        }
    };

    content
}

/// Full score breakdown for one video.
#[component]
fn ScoreReport(response: VideoResponse) -> Element {
    let total = format!("{:.1}", response.scoring.total_score);
    let resolution = response.metadata.resolution;
    let rows: Vec<(&'static str, String, String)> = response
        .scoring
        .breakdown()
        .into_iter()
        .map(|row| (row.label, format!("{:.1}", row.score), row.justification.to_string()))
        .collect();

    rsx! {
        article {
            video {
                src: "{response.video_url}",
                controls: true,
                width: "100%",
            }
            footer {
                span { class: "score-total", "{total}" }
                small { " total score" }
                if !response.is_success() {
                    p { class: "status-err", "Backend status: {response.status}" }
                }
            }
        }

        section {
            h2 { "Breakdown" }
            table {
                thead {
                    tr {
                        th { "Criterion" }
                        th { "Score" }
                        th { "Justification" }
                    }
                }
                tbody {
                    for (label, score, justification) in rows {
                        tr { key: "{label}",
                            td { "{label}" }
                            td { "{score}" }
                            td { "{justification}" }
                        }
                    }
                }
            }
        }

        section {
            h2 { "File" }
            ul {
                li { "Resolution: {resolution.width}×{resolution.height}" }
                li { "Duration: {response.metadata.duration_seconds}s" }
                li { "Size: {response.metadata.file_size_mb} MB" }
                li { "Identifier: " code { "{response.identifier}" } }
            }
        }
    }
}
