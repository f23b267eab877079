use crate::device_image_source::interface::CapturedImage;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{PredictionClient, PredictionResult};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct PredictionClientFake {
    result: PredictionResult,
    calls: Arc<Mutex<Vec<CapturedImage>>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientFake {
    pub fn new(result: PredictionResult, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            result,
            calls: Arc::new(Mutex::new(Vec::new())),
            logger: logger.with_namespace("fake"),
        }
    }

    pub fn calls(&self) -> Vec<CapturedImage> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl PredictionClient for PredictionClientFake {
    fn predict(&self, image: &CapturedImage) -> PredictionResult {
        let _ = self
            .logger
            .info(&format!("PredictionClientFake::predict({})", image.uri));
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(image.clone());
        }
        self.result.clone()
    }
}
