use crate::prediction_client::interface::PredictionResult;
use crate::screen::core::{Phase, State};
use std::path::PathBuf;

pub const TITLE: &str = "📷 Campus Navigator";
pub const CAPTURE_LABEL: &str = "Capture Image";
pub const SELECT_LABEL: &str = "Select From Gallery";

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Success {
        landmark_line: String,
        distance_line: String,
    },
    /// Drawn in red.
    Failure { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub title: &'static str,
    pub image: Option<PathBuf>,
    pub loading: bool,
    pub result: Option<ResultView>,
    pub buttons_enabled: bool,
}

pub fn render(state: &State) -> View {
    let result = match &state.phase {
        Phase::Displaying(PredictionResult::Success {
            landmark,
            estimated_distance_meters,
        }) => Some(ResultView::Success {
            landmark_line: format!("🏢 Landmark: {}", landmark),
            distance_line: format!("📏 Distance: {} meters", estimated_distance_meters),
        }),
        Phase::Displaying(PredictionResult::Failure { message }) => Some(ResultView::Failure {
            message: message.clone(),
        }),
        Phase::Idle | Phase::Loading { .. } => None,
    };

    View {
        title: TITLE,
        image: state.image.as_ref().and_then(|image| image.local_path()),
        loading: matches!(state.phase, Phase::Loading { .. }),
        result,
        buttons_enabled: state.acquiring.is_none(),
    }
}
