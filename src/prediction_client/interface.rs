use crate::device_image_source::interface::CapturedImage;
use std::path::PathBuf;

pub const MESSAGE_SOMETHING_WENT_WRONG: &str = "Something went wrong";
pub const MESSAGE_NO_RESPONSE_DATA: &str = "No response data";

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResult {
    Success {
        landmark: String,
        estimated_distance_meters: f64,
    },
    Failure {
        message: String,
    },
}

impl PredictionResult {
    pub fn failure(message: &str) -> Self {
        PredictionResult::Failure {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("image uri {0:?} does not name a local file")]
    UnresolvableUri(String),
    #[error("failed to read {path:?}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("response had no body")]
    EmptyResponse,
}

impl PredictError {
    /// The only two messages a user ever sees for a failed upload.
    pub fn user_message(&self) -> &'static str {
        match self {
            PredictError::EmptyResponse => MESSAGE_NO_RESPONSE_DATA,
            _ => MESSAGE_SOMETHING_WENT_WRONG,
        }
    }
}

/// Never fails: every error is folded into `PredictionResult::Failure`.
pub trait PredictionClient: Send + Sync {
    fn predict(&self, image: &CapturedImage) -> PredictionResult;
}
