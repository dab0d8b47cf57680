mod quotes;

pub use quotes::QuoteBook;

use crate::Result;
use crate::analysis::EmotionLabel;
use async_trait::async_trait;

/// Produces a short caption or quote matching an emotion.
///
/// `source_text` is the text that triggered the analysis, when there was one.
/// It is accepted so richer implementations can tailor the caption to the
/// input; the stub ignores it.
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    async fn caption(&self, emotion: EmotionLabel, source_text: Option<&str>) -> Result<String>;
}
