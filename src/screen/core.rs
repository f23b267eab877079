use crate::device_image_source::interface::{CapturedImage, ImageSourceKind};
use crate::prediction_client::interface::PredictionResult;
use crate::screen::acquire::AcquireError;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
    },
    Displaying(PredictionResult),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    pub image: Option<CapturedImage>,
    pub phase: Phase,
    /// Set while a permission prompt, picker or the alert that follows it is open.
    pub acquiring: Option<ImageSourceKind>,
    pub last_request_id: RequestId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    AcquireRequested(ImageSourceKind),
    AcquireDone {
        source: ImageSourceKind,
        result: Result<CapturedImage, AcquireError>,
    },
    PredictDone {
        request_id: RequestId,
        result: PredictionResult,
    },
    AlertDismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AcquireImage {
        source: ImageSourceKind,
    },
    Predict {
        request_id: RequestId,
        image: CapturedImage,
    },
    ShowAlert {
        message: String,
    },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![])
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state.clone(), event) {
        // Acquisition
        (
            State {
                acquiring: None, ..
            },
            Event::AcquireRequested(source),
        ) => (
            State {
                acquiring: Some(source),
                ..state
            },
            vec![Effect::AcquireImage { source }],
        ),
        (
            State {
                acquiring: Some(_),
                ..
            },
            Event::AcquireRequested(_),
        ) => (state, vec![]),

        (_, Event::AcquireDone { result: Ok(image), .. }) => {
            let request_id = state.last_request_id + 1;
            (
                State {
                    image: Some(image.clone()),
                    phase: Phase::Loading { request_id },
                    acquiring: None,
                    last_request_id: request_id,
                },
                vec![Effect::Predict { request_id, image }],
            )
        }
        (_, Event::AcquireDone { source, result: Err(error) }) => {
            match alert_message(source, &error) {
                // Stays acquiring until the alert is dismissed.
                Some(message) => (state, vec![Effect::ShowAlert { message }]),
                None => (
                    State {
                        acquiring: None,
                        ..state
                    },
                    vec![],
                ),
            }
        }
        (_, Event::AlertDismissed) => (
            State {
                acquiring: None,
                ..state
            },
            vec![],
        ),

        // Prediction
        (
            State {
                phase: Phase::Loading { request_id: current },
                ..
            },
            Event::PredictDone { request_id, result },
        ) if request_id == current => (
            State {
                phase: Phase::Displaying(result),
                ..state
            },
            vec![],
        ),

        // Stale prediction, superseded by a newer capture
        (_, Event::PredictDone { .. }) => (state, vec![]),
    }
}

fn alert_message(source: ImageSourceKind, error: &AcquireError) -> Option<String> {
    match (source, error) {
        (_, AcquireError::Cancelled) => None,
        (ImageSourceKind::Camera, AcquireError::PermissionDenied(_)) => {
            Some("Camera permission is required!".to_string())
        }
        (ImageSourceKind::Library, AcquireError::PermissionDenied(_)) => {
            Some("Gallery access is required!".to_string())
        }
        (ImageSourceKind::Camera, AcquireError::Device(message)) => {
            Some(format!("Could not open the camera: {}", message))
        }
        (ImageSourceKind::Library, AcquireError::Device(message)) => {
            Some(format!("Could not open the gallery: {}", message))
        }
    }
}
