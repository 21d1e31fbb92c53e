use thiserror::Error;

use crate::ai::GenerativeError;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("No response from AI")]
    EmptyResponse,

    #[error("The AI response could not be processed: {0}")]
    MalformedResponse(String),

    #[error("Recipe request failed: {0}")]
    AcquisitionFailed(#[from] GenerativeError),
}

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    #[error("Review {0} must not be blank")]
    BlankField(&'static str),
}
