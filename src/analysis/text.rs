use super::{EmotionLabel, MoodEstimate, TextEmotionAnalyzer};
use crate::Result;
use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

/// Keyword-matching stand-in for a real sentiment model.
///
/// Scores every label by how many of its keywords appear in the input and
/// picks uniformly among the labels tied for the highest count. Text with no
/// keyword hits at all resolves to a uniformly random label.
pub struct KeywordAnalyzer {
    keywords: [(EmotionLabel, &'static [&'static str]); 6],
}

impl KeywordAnalyzer {
    pub fn new() -> Self {
        Self {
            keywords: [
                (
                    EmotionLabel::Happy,
                    &[
                        "happy",
                        "joy",
                        "excited",
                        "great",
                        "wonderful",
                        "love",
                        "glad",
                        "pleased",
                        "delighted",
                        "content",
                    ],
                ),
                (
                    EmotionLabel::Sad,
                    &[
                        "sad",
                        "unhappy",
                        "depressed",
                        "down",
                        "miserable",
                        "upset",
                        "disappointed",
                        "gloomy",
                        "heartbroken",
                    ],
                ),
                (
                    EmotionLabel::Angry,
                    &[
                        "angry",
                        "mad",
                        "furious",
                        "annoyed",
                        "irritated",
                        "frustrated",
                        "outraged",
                        "enraged",
                    ],
                ),
                (
                    EmotionLabel::Neutral,
                    &["okay", "fine", "neutral", "average", "alright", "so-so"],
                ),
                (
                    EmotionLabel::Surprised,
                    &[
                        "surprised",
                        "shocked",
                        "amazed",
                        "astonished",
                        "stunned",
                        "wow",
                        "unexpected",
                    ],
                ),
                (
                    EmotionLabel::Fearful,
                    &[
                        "afraid",
                        "scared",
                        "fearful",
                        "terrified",
                        "anxious",
                        "worried",
                        "nervous",
                        "panic",
                    ],
                ),
            ],
        }
    }

    /// Same as [`TextEmotionAnalyzer::analyze`], with the randomness source
    /// supplied by the caller so tests can seed it.
    pub fn analyze_with_rng<R: Rng>(&self, text: &str, rng: &mut R) -> MoodEstimate {
        let text = text.to_lowercase();

        // Each keyword counts once no matter how often it repeats
        let counts: Vec<(EmotionLabel, usize)> = self
            .keywords
            .iter()
            .map(|(label, words)| {
                let hits = words.iter().filter(|word| text.contains(*word)).count();
                (*label, hits)
            })
            .collect();

        debug!("Keyword hit counts: {:?}", counts);

        let max_count = counts.iter().map(|(_, hits)| *hits).max().unwrap_or(0);

        let pool: Vec<EmotionLabel> = if max_count == 0 {
            EmotionLabel::ALL.to_vec()
        } else {
            counts
                .iter()
                .filter(|(_, hits)| *hits == max_count)
                .map(|(label, _)| *label)
                .collect()
        };
        let emotion = pool[rng.gen_range(0..pool.len())];

        let base = rng.gen_range(60..=90);
        let variation = rng.gen_range(-10..=10);
        MoodEstimate::clamped(emotion, base + variation)
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextEmotionAnalyzer for KeywordAnalyzer {
    async fn analyze(&self, text: &str) -> Result<MoodEstimate> {
        Ok(self.analyze_with_rng(text, &mut rand::thread_rng()))
    }
}
