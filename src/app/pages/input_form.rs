//! Input form page component.
//!
//! Field values are written straight into the shared draft, so leaving the
//! page and coming back keeps whatever was typed. Submitting hands the
//! request to the backend and moves on to the dashboard, which picks the
//! result up from shared state when it arrives.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use scoring_types::CRITERIA;

use crate::app::api;
use crate::app::components::Layout;
use crate::app::state::use_shared_state;
use crate::app::Route;

#[component]
pub fn InputForm() -> Element {
    let shared = use_shared_state();
    let nav = navigator();

    let draft = shared.draft();
    let in_flight = shared.pending().is_some();
    let last_error = shared.last_error();
    let mut form_error = use_signal(|| None::<String>);

    let submit = move |_| {
        let request = match shared.draft().to_request() {
            Ok(request) => request,
            Err(e) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };
        form_error.set(None);

        tracing::info!("Submitting brief for {}", request.video_details.product_name);
        shared.record_submission(request.clone());

        // Outlives this page: the result must land even after we navigate away
        spawn_forever(async move {
            match api::score_video(&request).await {
                Ok(response) => {
                    shared.record_result(response);
                }
                Err(e) => shared.record_failure(e.to_string()),
            }
        });

        nav.push(Route::Dashboard {});
    };

    let weights = draft.criteria.weights();

    rsx! {
        Layout {
            title: "New Video".to_string(),
            lead: "Describe the product and weight what matters most.".to_string(),
            nav_active: "input-form".to_string(),

            if let Some(err) = last_error {
                article {
                    p { class: "status-err", "Last submission failed: {err}" }
                }
            }

            form {
                onsubmit: move |e: FormEvent| e.prevent_default(),

                fieldset {
                    legend { "Product" }
                    Field {
                        label: "Product name",
                        value: draft.product_name.clone(),
                        oninput: move |v: String| shared.update_draft(|d| d.product_name = v),
                    }
                    Field {
                        label: "Tagline",
                        value: draft.tagline.clone(),
                        oninput: move |v: String| shared.update_draft(|d| d.tagline = v),
                    }
                    Field {
                        label: "Call to action",
                        value: draft.cta_text.clone(),
                        oninput: move |v: String| shared.update_draft(|d| d.cta_text = v),
                    }
                    Field {
                        label: "Brand palette (comma-separated hex)",
                        value: draft.brand_palette.clone(),
                        oninput: move |v: String| shared.update_draft(|d| d.brand_palette = v),
                    }
                    Field {
                        label: "Logo URL",
                        input_type: "url",
                        value: draft.logo_url.clone(),
                        oninput: move |v: String| shared.update_draft(|d| d.logo_url = v),
                    }
                    Field {
                        label: "Product video URL",
                        input_type: "url",
                        value: draft.product_video_url.clone(),
                        oninput: move |v: String| shared.update_draft(|d| d.product_video_url = v),
                    }
                }

                fieldset { class: "grid",
                    Field {
                        label: "Width (px)",
                        input_type: "number",
                        value: draft.width.clone(),
                        oninput: move |v: String| shared.update_draft(|d| d.width = v),
                    }
                    Field {
                        label: "Height (px)",
                        input_type: "number",
                        value: draft.height.clone(),
                        oninput: move |v: String| shared.update_draft(|d| d.height = v),
                    }
                    Field {
                        label: "Duration (s)",
                        input_type: "number",
                        value: draft.duration.clone(),
                        oninput: move |v: String| shared.update_draft(|d| d.duration = v),
                    }
                }

                fieldset {
                    legend { "Scoring weights" }
                    div { class: "criteria-grid",
                        for ((key, label), (_, weight)) in CRITERIA.into_iter().zip(weights) {
                            Field {
                                key: "{key}",
                                label: label,
                                input_type: "number",
                                value: weight.to_string(),
                                oninput: move |v: String| {
                                    // Ignore partial input like "" while the user is typing
                                    if let Ok(w) = v.trim().parse::<u32>() {
                                        shared.update_draft(|d| {
                                            if let Some(slot) = d.criteria.weight_mut(key) {
                                                *slot = w;
                                            }
                                        });
                                    }
                                },
                            }
                        }
                    }
                }

                Field {
                    label: "Email me when it's ready (optional)",
                    input_type: "email",
                    value: draft.email.clone(),
                    oninput: move |v: String| shared.update_draft(|d| d.email = v),
                }

                if let Some(err) = form_error() {
                    p { class: "status-err", "{err}" }
                }

                button {
                    r#type: "button",
                    disabled: in_flight,
                    aria_busy: if in_flight { "true" } else { "false" },
                    onclick: submit,
                    if in_flight { "Scoring..." } else { "Generate & score" }
                }
            }
        }
    }
}

/// Labelled input bound to one draft field.
#[component]
fn Field(
    label: &'static str,
    value: String,
    #[props(default = "text")] input_type: &'static str,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            "{label}"
            input {
                r#type: input_type,
                value: "{value}",
                oninput: move |e: FormEvent| oninput.call(e.value()),
            }
        }
    }
}
