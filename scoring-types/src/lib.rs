//! Wire types for the video scoring API.
//!
//! These types cross the boundary between the web client and the scoring
//! backend (`POST /score-video`, `GET /score-video/{identifier}/`).
//!
//! # Modules
//! - [`request`] - What the input form submits (VideoRequest)
//! - [`response`] - What the backend returns (VideoResponse, Scoring)

pub mod request;
pub mod response;

// Re-export commonly used types at crate root
pub use request::{Dimensions, ScoringCriteria, VideoDetails, VideoRequest};
pub use response::{Justifications, Metadata, Resolution, Scoring, VideoResponse};

/// The six criteria every video is scored against, in display order.
///
/// Keys match the field names used on the wire by both
/// [`ScoringCriteria`] and [`Scoring`].
pub const CRITERIA: [(&str, &str); 6] = [
    ("background_foreground_separation", "Background / Foreground Separation"),
    ("brand_guideline_adherence", "Brand Guideline Adherence"),
    ("creativity_visual_appeal", "Creativity & Visual Appeal"),
    ("product_focus", "Product Focus"),
    ("call_to_action", "Call to Action"),
    ("audience_relevance", "Audience Relevance"),
];
