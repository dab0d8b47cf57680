mod image;
mod text;
mod types;

pub use self::image::StubImageAnalyzer;
pub use text::KeywordAnalyzer;
pub use types::{EmotionLabel, MoodEstimate};

use crate::Result;
use async_trait::async_trait;

/// Estimates the dominant emotion in a piece of free text.
///
/// Implementations must be safe to call from concurrent requests and must
/// only ever return one of the six [`EmotionLabel`] values.
#[async_trait]
pub trait TextEmotionAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<MoodEstimate>;
}

/// Estimates the dominant emotion in an image.
///
/// Fails with [`crate::Error::InvalidImage`] when the bytes cannot be decoded
/// as a supported image format.
#[async_trait]
pub trait ImageEmotionAnalyzer: Send + Sync {
    async fn analyze(&self, bytes: &[u8]) -> Result<MoodEstimate>;
}
