//! Response body for `POST /score-video` and `GET /score-video/{identifier}/`.

use serde::{Deserialize, Serialize};

use crate::CRITERIA;

/// Frame size of the generated video
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// File-level facts about the generated video.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Metadata {
    /// Size on disk in megabytes, rounded to two decimals
    pub file_size_mb: f64,

    pub duration_seconds: u32,

    pub resolution: Resolution,
}

/// Free-text reasoning behind each criterion's score.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Justifications {
    pub background_foreground_separation: String,
    pub brand_guideline_adherence: String,
    pub creativity_visual_appeal: String,
    pub product_focus: String,
    pub call_to_action: String,
    pub audience_relevance: String,
}

/// Per-criterion scores plus the weighted total.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Scoring {
    pub background_foreground_separation: f64,
    pub brand_guideline_adherence: f64,
    pub creativity_visual_appeal: f64,
    pub product_focus: f64,
    pub call_to_action: f64,
    pub audience_relevance: f64,
    pub total_score: f64,
    pub justifications: Justifications,
}

/// One row of a score breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionScore<'a> {
    /// Wire name (e.g. "product_focus")
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub score: f64,
    pub justification: &'a str,
}

impl Scoring {
    /// Scores and justifications in [`CRITERIA`] order.
    pub fn breakdown(&self) -> Vec<CriterionScore<'_>> {
        let j = &self.justifications;
        let rows = [
            (self.background_foreground_separation, &j.background_foreground_separation),
            (self.brand_guideline_adherence, &j.brand_guideline_adherence),
            (self.creativity_visual_appeal, &j.creativity_visual_appeal),
            (self.product_focus, &j.product_focus),
            (self.call_to_action, &j.call_to_action),
            (self.audience_relevance, &j.audience_relevance),
        ];

        CRITERIA
            .iter()
            .zip(rows)
            .map(|(&(key, label), (score, justification))| CriterionScore {
                key,
                label,
                score,
                justification: justification.as_str(),
            })
            .collect()
    }
}

/// A scored video as returned by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoResponse {
    /// "success" when generation and scoring both completed
    pub status: String,

    pub video_url: String,

    pub scoring: Scoring,

    pub metadata: Metadata,

    /// Backend-assigned identifier (UUID v4), used in `/dashboard/:id`
    #[serde(default)]
    pub identifier: String,
}

impl VideoResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
