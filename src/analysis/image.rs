use super::{EmotionLabel, ImageEmotionAnalyzer, MoodEstimate};
use crate::{Error, Result};
use async_trait::async_trait;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Placeholder for a real facial-emotion model.
///
/// The byte buffer must decode as a supported image format, but pixel data is
/// never inspected: the label comes from a fixed weighted draw.
pub struct StubImageAnalyzer {
    distribution: [(EmotionLabel, f64); 6],
}

impl StubImageAnalyzer {
    pub fn new() -> Self {
        Self {
            distribution: [
                (EmotionLabel::Happy, 0.3),
                (EmotionLabel::Sad, 0.2),
                (EmotionLabel::Angry, 0.1),
                (EmotionLabel::Neutral, 0.2),
                (EmotionLabel::Surprised, 0.1),
                (EmotionLabel::Fearful, 0.1),
            ],
        }
    }

    /// Same as [`ImageEmotionAnalyzer::analyze`], with the randomness source
    /// supplied by the caller so tests can seed it.
    pub fn analyze_with_rng<R: Rng>(&self, bytes: &[u8], rng: &mut R) -> Result<MoodEstimate> {
        // Decoding is purely a validation gate
        let decoded = image::load_from_memory(bytes)?;
        debug!("Decoded {}x{} image", decoded.width(), decoded.height());

        let (emotion, _) = self
            .distribution
            .choose_weighted(rng, |(_, weight)| *weight)
            .map_err(|e| Error::internal(e.to_string()))?;

        let base = rng.gen_range(70..=95);
        let variation = rng.gen_range(-10..=10);
        Ok(MoodEstimate::clamped(*emotion, base + variation))
    }
}

impl Default for StubImageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageEmotionAnalyzer for StubImageAnalyzer {
    async fn analyze(&self, bytes: &[u8]) -> Result<MoodEstimate> {
        self.analyze_with_rng(bytes, &mut rand::thread_rng())
    }
}
