//! Score aggregator: but-check, punctuation emphasis and normalization
//!
//! compound = s / sqrt(s² + alpha), clamped to [-1, 1], where s is the
//! ordered sum of token valences pushed outward by punctuation emphasis.

use tracing::trace;

use crate::core::punctuation::punctuation_emphasis;
use crate::types::{SentimentRecord, ValenceConfig};

/// Squash a raw sum into [-1, 1]
pub fn normalize(score: f64, alpha: f64) -> f64 {
    let norm = score / (score * score + alpha).sqrt();
    norm.clamp(-1.0, 1.0)
}

/// Positive sum, negative sum and neutral count.
///
/// Every non-zero valence also contributes a flat unit in its direction.
pub fn sift_sentiment_scores(sentiments: &[f64]) -> (f64, f64, usize) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0;
    for &v in sentiments {
        if v > 0.0 {
            pos_sum += v + 1.0;
        }
        if v < 0.0 {
            neg_sum += v - 1.0;
        }
        if v == 0.0 {
            neu_count += 1;
        }
    }
    (pos_sum, neg_sum, neu_count)
}

/// Turns per-token valences into a sentence record
#[derive(Debug, Clone, Copy)]
pub struct ScoreAggregator<'a> {
    config: &'a ValenceConfig,
}

impl<'a> ScoreAggregator<'a> {
    pub fn new(config: &'a ValenceConfig) -> Self {
        Self { config }
    }

    /// Shift weight from before the first contrastive conjunction to after it.
    ///
    /// `sentiments` is aligned with `lower`; the conjunction's own slot is
    /// left alone and later conjunctions change nothing.
    pub fn but_check(&self, lower: &[&str], mut sentiments: Vec<f64>) -> Vec<f64> {
        let conjunction = self.config.contrastive_conjunction.as_str();
        let Some(pivot) = lower.iter().position(|w| *w == conjunction) else {
            return sentiments;
        };
        trace!(pivot, "contrastive conjunction found");

        let scale = self.config.but_scale;
        for (i, s) in sentiments.iter_mut().enumerate() {
            if i < pivot {
                *s *= 1.0 - scale;
            } else if i > pivot {
                *s *= 1.0 + scale;
            }
        }
        sentiments
    }

    /// Aggregate ordered valences into the final record
    pub fn aggregate(&self, sentiments: &[f64], text: &str) -> SentimentRecord {
        if sentiments.is_empty() {
            return SentimentRecord::zero();
        }

        // order of summation matters for reproducible output
        let mut sum: f64 = sentiments.iter().sum();
        let amplifier = punctuation_emphasis(text, self.config);
        if sum > 0.0 {
            sum += amplifier;
        } else if sum < 0.0 {
            sum -= amplifier;
        }
        let compound = normalize(sum, self.config.normalize_alpha);

        let (mut pos_sum, mut neg_sum, neu_count) = sift_sentiment_scores(sentiments);
        if pos_sum >= neg_sum.abs() {
            pos_sum += amplifier;
        } else {
            neg_sum -= amplifier;
        }

        let neutral = neu_count as f64;
        let total = pos_sum + neg_sum.abs() + neutral;
        if total == 0.0 {
            return SentimentRecord {
                compound,
                ..SentimentRecord::zero()
            };
        }

        SentimentRecord {
            compound,
            positive: (pos_sum / total).abs(),
            negative: (neg_sum / total).abs(),
            neutral: (neutral / total).abs(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
