//! Request body for `POST /score-video`.

use serde::{Deserialize, Serialize};

/// Output frame size in pixels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Creative brief for the video to generate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoDetails {
    /// Full product name, used verbatim in generation prompts
    pub product_name: String,

    pub tagline: String,

    /// Brand colours as hex codes (e.g. "#FF0000")
    pub brand_palette: Vec<String>,

    pub dimensions: Dimensions,

    /// Target duration in seconds
    pub duration: u32,

    /// Call-to-action text shown at the end of the video
    pub cta_text: String,

    pub logo_url: String,

    pub product_video_url: String,
}

/// Relative weight of each scoring criterion.
///
/// The backend only interprets the weights relative to each other, so any
/// non-negative integers are accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoringCriteria {
    pub background_foreground_separation: u32,
    pub brand_guideline_adherence: u32,
    pub creativity_visual_appeal: u32,
    pub product_focus: u32,
    pub call_to_action: u32,
    pub audience_relevance: u32,
}

impl Default for ScoringCriteria {
    fn default() -> Self {
        Self {
            background_foreground_separation: 1,
            brand_guideline_adherence: 1,
            creativity_visual_appeal: 1,
            product_focus: 1,
            call_to_action: 1,
            audience_relevance: 1,
        }
    }
}

impl ScoringCriteria {
    /// Weights keyed by wire name, in [`crate::CRITERIA`] order.
    pub fn weights(&self) -> [(&'static str, u32); 6] {
        [
            ("background_foreground_separation", self.background_foreground_separation),
            ("brand_guideline_adherence", self.brand_guideline_adherence),
            ("creativity_visual_appeal", self.creativity_visual_appeal),
            ("product_focus", self.product_focus),
            ("call_to_action", self.call_to_action),
            ("audience_relevance", self.audience_relevance),
        ]
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> u32 {
        self.weights().iter().map(|(_, w)| w).sum()
    }

    /// Mutable access to a weight by wire name.
    pub fn weight_mut(&mut self, key: &str) -> Option<&mut u32> {
        match key {
            "background_foreground_separation" => Some(&mut self.background_foreground_separation),
            "brand_guideline_adherence" => Some(&mut self.brand_guideline_adherence),
            "creativity_visual_appeal" => Some(&mut self.creativity_visual_appeal),
            "product_focus" => Some(&mut self.product_focus),
            "call_to_action" => Some(&mut self.call_to_action),
            "audience_relevance" => Some(&mut self.audience_relevance),
            _ => None,
        }
    }
}

/// Request body for `POST /score-video`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoRequest {
    pub video_details: VideoDetails,

    pub scoring_criteria: ScoringCriteria,

    /// Address to notify once the video is ready (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
