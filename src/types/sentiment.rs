//! Sentence-level sentiment record

use serde::{Deserialize, Serialize};

/// Compound threshold for a positive / negative label
pub const LABEL_THRESHOLD: f64 = 0.05;

/// Final score of one sentence.
///
/// `positive + negative + neutral == 1` up to rounding, except for the
/// all-zero record returned when nothing was scored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentRecord {
    /// Normalized polarity in [-1, 1]
    pub compound: f64,
    /// Share of positive intensity in [0, 1]
    #[serde(alias = "pos")]
    pub positive: f64,
    /// Share of negative intensity in [0, 1]
    #[serde(alias = "neg")]
    pub negative: f64,
    /// Share of neutral tokens in [0, 1]
    #[serde(alias = "neu")]
    pub neutral: f64,
}

impl SentimentRecord {
    /// The degenerate record for an empty valence list
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn label(&self) -> SentimentLabel {
        if self.compound >= LABEL_THRESHOLD {
            SentimentLabel::Positive
        } else if self.compound <= -LABEL_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "compound={:.4} | pos={:.3} | neg={:.3} | neu={:.3}",
            self.compound, self.positive, self.negative, self.neutral
        )
    }
}

/// Coarse classification of a compound score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Negative => "NEGATIVE",
        };
        write!(f, "{}", name)
    }
}
