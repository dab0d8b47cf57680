use crate::analysis::{EmotionLabel, MoodEstimate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TextAnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub generate_caption: bool,
}

/// Wire shape shared by both analyze endpoints. `caption` is always present
/// and is `null` unless caption generation was requested.
#[derive(Debug, Serialize)]
pub struct MoodResponse {
    pub emotion: EmotionLabel,
    pub score: f32,
    pub caption: Option<String>,
}

impl MoodResponse {
    pub fn new(estimate: MoodEstimate, caption: Option<String>) -> Self {
        Self {
            emotion: estimate.emotion,
            score: estimate.score,
            caption,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
