use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of mood categories used throughout the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Neutral,
    Surprised,
    Fearful,
}

impl EmotionLabel {
    pub const ALL: [EmotionLabel; 6] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Neutral,
        EmotionLabel::Surprised,
        EmotionLabel::Fearful,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Surprised => "surprised",
            EmotionLabel::Fearful => "fearful",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An emotion guess with a 0-100 confidence-like score.
///
/// The score has no calibrated statistical meaning; it is illustrative only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodEstimate {
    pub emotion: EmotionLabel,
    pub score: f32,
}

impl MoodEstimate {
    /// Builds an estimate from a raw confidence draw, clamping the score
    /// into 0..=100.
    pub fn clamped(emotion: EmotionLabel, raw_score: i32) -> Self {
        Self {
            emotion,
            score: raw_score.clamp(0, 100) as f32,
        }
    }
}
