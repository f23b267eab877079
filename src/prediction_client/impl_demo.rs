use crate::device_image_source::interface::CapturedImage;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{PredictionClient, PredictionResult};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// Labels the campus model is trained on.
pub const LANDMARKS: [&str; 7] = [
    "Block A",
    "Block B",
    "Block C",
    "Block D",
    "Block E",
    "Block F",
    "IEEE office",
];

/// Offline stand-in for the prediction service.
pub struct PredictionClientDemo {
    latency: Duration,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientDemo {
    pub fn new(latency: Duration, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            latency,
            logger: logger.with_namespace("demo"),
        }
    }
}

impl PredictionClient for PredictionClientDemo {
    fn predict(&self, image: &CapturedImage) -> PredictionResult {
        let _ = self
            .logger
            .info(&format!("Pretending to upload {}", image.uri));
        std::thread::sleep(self.latency);

        let mut rng = rand::rng();
        let landmark = LANDMARKS[rng.random_range(0..LANDMARKS.len())];
        let distance: f64 = rng.random_range(2.0..60.0);

        PredictionResult::Success {
            landmark: landmark.to_string(),
            estimated_distance_meters: (distance * 100.0).round() / 100.0,
        }
    }
}
