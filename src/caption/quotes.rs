use super::CaptionProvider;
use crate::Result;
use crate::analysis::EmotionLabel;
use async_trait::async_trait;
use rand::Rng;

type QuoteSet = [&'static str; 5];

const NEUTRAL_QUOTES: QuoteSet = [
    "Balance is not something you find, it's something you create.",
    "Simplicity is the ultimate sophistication.",
    "In the middle of difficulty lies opportunity.",
    "Life is really simple, but we insist on making it complicated.",
    "The quieter you become, the more you can hear.",
];

/// A fixed book of five quotes per emotion, standing in for a generative
/// caption model.
pub struct QuoteBook {
    quotes: [(EmotionLabel, QuoteSet); 6],
}

impl QuoteBook {
    pub fn new() -> Self {
        Self {
            quotes: [
                (
                    EmotionLabel::Happy,
                    [
                        "Sunshine mixed with a little hurricane.",
                        "Happiness is not by chance, but by choice.",
                        "The best is yet to come.",
                        "Life is better when you're laughing.",
                        "Radiating joy from the inside out.",
                    ],
                ),
                (
                    EmotionLabel::Sad,
                    [
                        "Even the darkest night will end and the sun will rise.",
                        "It's okay not to be okay sometimes.",
                        "Behind every strong person is a story that gave them no choice.",
                        "The wound is the place where the light enters you.",
                        "Sadness flies away on the wings of time.",
                    ],
                ),
                (
                    EmotionLabel::Angry,
                    [
                        "Speak when you are angry and you will make the best speech you will ever regret.",
                        "For every minute you are angry, you lose sixty seconds of happiness.",
                        "Anger is an acid that can do more harm to the vessel in which it is stored than to anything on which it is poured.",
                        "The best fighter is never angry.",
                        "Holding onto anger is like drinking poison and expecting the other person to die.",
                    ],
                ),
                (EmotionLabel::Neutral, NEUTRAL_QUOTES),
                (
                    EmotionLabel::Surprised,
                    [
                        "Life is full of surprises and serendipity.",
                        "The best things happen unexpectedly.",
                        "Sometimes the smallest things take up the most room in your heart.",
                        "Surprise is the greatest gift which life can grant us.",
                        "The unexpected is what changes our lives.",
                    ],
                ),
                (
                    EmotionLabel::Fearful,
                    [
                        "Fear is only as deep as the mind allows.",
                        "Everything you want is on the other side of fear.",
                        "Courage is resistance to fear, mastery of fear, not absence of fear.",
                        "Fear is a reaction. Courage is a decision.",
                        "The cave you fear to enter holds the treasure you seek.",
                    ],
                ),
            ],
        }
    }

    /// The full caption set for a label.
    pub fn quotes_for(&self, emotion: EmotionLabel) -> &QuoteSet {
        self.quotes
            .iter()
            .find(|(label, _)| *label == emotion)
            .map(|(_, set)| set)
            // Labels missing from the book fall back to the neutral set
            .unwrap_or(&NEUTRAL_QUOTES)
    }

    /// Same as [`CaptionProvider::caption`], with the randomness source
    /// supplied by the caller so tests can seed it.
    pub fn caption_with_rng<R: Rng>(&self, emotion: EmotionLabel, rng: &mut R) -> &'static str {
        let set = self.quotes_for(emotion);
        set[rng.gen_range(0..set.len())]
    }
}

impl Default for QuoteBook {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptionProvider for QuoteBook {
    async fn caption(&self, emotion: EmotionLabel, _source_text: Option<&str>) -> Result<String> {
        Ok(self
            .caption_with_rng(emotion, &mut rand::thread_rng())
            .to_string())
    }
}
