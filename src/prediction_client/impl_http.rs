use crate::device_image_source::interface::CapturedImage;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{PredictError, PredictionClient, PredictionResult};
use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const FIELD_NAME: &str = "image";
pub const FILE_NAME: &str = "image.jpg";
pub const MEDIA_TYPE: &str = "image/jpeg";

#[derive(Debug, Deserialize)]
struct PredictResponse {
    landmark: String,
    estimated_distance: f64,
}

pub struct PredictionClientHttp {
    client: reqwest::blocking::Client,
    url: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientHttp {
    /// Uploads never time out, the backend may take longer than reqwest's
    /// 30 second default.
    pub fn new(url: &str, logger: Arc<dyn Logger + Send + Sync>) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder().timeout(None).build()?;

        Ok(Self {
            client,
            url: url.to_string(),
            logger: logger.with_namespace("http"),
        })
    }

    fn try_predict(&self, image: &CapturedImage) -> Result<PredictResponse, PredictError> {
        let path = image
            .local_path()
            .ok_or_else(|| PredictError::UnresolvableUri(image.uri.clone()))?;
        let bytes = std::fs::read(&path).map_err(|source| PredictError::File {
            path: path.clone(),
            source,
        })?;

        let part = Part::bytes(bytes)
            .file_name(FILE_NAME)
            .mime_str(MEDIA_TYPE)?;
        let form = Form::new().part(FIELD_NAME, part);

        // The multipart encoder sets `Content-Type: multipart/form-data` with its boundary.
        let response = self.client.post(&self.url).multipart(form).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status));
        }

        parse_body(&response.text()?)
    }
}

fn parse_body(body: &str) -> Result<PredictResponse, PredictError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(PredictError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(body)?;
    if is_falsy(&value) {
        return Err(PredictError::EmptyResponse);
    }
    Ok(serde_json::from_value(value)?)
}

/// `null`, `false`, `0` and `""` carry no prediction.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

impl PredictionClient for PredictionClientHttp {
    fn predict(&self, image: &CapturedImage) -> PredictionResult {
        let _ = self
            .logger
            .info(&format!("Uploading {} to {}", image.uri, self.url));

        match self.try_predict(image) {
            Ok(response) => {
                let _ = self.logger.info(&format!(
                    "Predicted {} at {} meters",
                    response.landmark, response.estimated_distance
                ));
                PredictionResult::Success {
                    landmark: response.landmark,
                    estimated_distance_meters: response.estimated_distance,
                }
            }
            Err(e) => {
                let _ = self.logger.error(&format!("Prediction failed: {}", e));
                PredictionResult::failure(e.user_message())
            }
        }
    }
}
