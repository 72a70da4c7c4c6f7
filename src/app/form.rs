//! Input form model.
//!
//! Field values are kept as the raw strings the user typed so that a
//! half-filled form survives navigation unchanged; conversion to the wire
//! type happens only on submit.

use scoring_types::{Dimensions, ScoringCriteria, VideoDetails, VideoRequest};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Raw values of the input form.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoForm {
    pub product_name: String,
    pub tagline: String,
    /// Comma-separated hex colours
    pub brand_palette: String,
    pub width: String,
    pub height: String,
    pub duration: String,
    pub cta_text: String,
    pub logo_url: String,
    pub product_video_url: String,
    pub email: String,
    pub criteria: ScoringCriteria,
}

impl Default for VideoForm {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            tagline: String::new(),
            brand_palette: String::new(),
            width: "1080".to_string(),
            height: "1920".to_string(),
            duration: "15".to_string(),
            cta_text: String::new(),
            logo_url: String::new(),
            product_video_url: String::new(),
            email: String::new(),
            criteria: ScoringCriteria::default(),
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(value.to_string())
}

fn number(field: &'static str, value: &str) -> Result<u32, FormError> {
    value.trim().parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl VideoForm {
    /// Brand palette split into individual colours, blanks dropped.
    pub fn palette(&self) -> Vec<String> {
        self.brand_palette
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Build the request body, reporting the first field that is unusable.
    pub fn to_request(&self) -> Result<VideoRequest, FormError> {
        let email = self.email.trim();

        Ok(VideoRequest {
            video_details: VideoDetails {
                product_name: required("Product name", &self.product_name)?,
                tagline: self.tagline.trim().to_string(),
                brand_palette: self.palette(),
                dimensions: Dimensions {
                    width: number("Width", &self.width)?,
                    height: number("Height", &self.height)?,
                },
                duration: number("Duration", &self.duration)?,
                cta_text: self.cta_text.trim().to_string(),
                logo_url: required("Logo URL", &self.logo_url)?,
                product_video_url: required("Product video URL", &self.product_video_url)?,
            },
            scoring_criteria: self.criteria,
            email: (!email.is_empty()).then(|| email.to_string()),
        })
    }
}
