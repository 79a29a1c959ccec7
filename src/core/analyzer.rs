//! Sentiment analyzer: tokens → adjusted valences → sentence record
//!
//! The analyzer owns read-only lexicon, dictionaries and config; scoring
//! never mutates them, so one analyzer can be shared across threads.

use tracing::debug;

use crate::core::adjuster::ValenceAdjuster;
use crate::core::aggregator::ScoreAggregator;
use crate::core::lexicon::{BoosterDict, ContextDictionaries, Lexicon, LexiconLookup, NegationSet};
use crate::core::SentiText;
use crate::types::{SentimentRecord, ValenceConfig};

/// Rule-based sentiment analyzer
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer<L = Lexicon, D = ContextDictionaries> {
    lexicon: L,
    dictionaries: D,
    config: ValenceConfig,
}

impl<L: LexiconLookup> SentimentAnalyzer<L, ContextDictionaries> {
    /// Analyzer with the default dictionaries and calibration
    pub fn new(lexicon: L) -> Self {
        Self::with_parts(lexicon, ContextDictionaries::default(), ValenceConfig::default())
    }
}

impl<L: LexiconLookup, D: NegationSet + BoosterDict> SentimentAnalyzer<L, D> {
    pub fn with_parts(lexicon: L, dictionaries: D, config: ValenceConfig) -> Self {
        Self {
            lexicon,
            dictionaries,
            config,
        }
    }

    /// Replace the calibration
    pub fn with_config(mut self, config: ValenceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ValenceConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Tokenize and score raw text
    pub fn polarity_scores(&self, text: &str) -> SentimentRecord {
        self.score(&SentiText::new(text))
    }

    /// Score pre-tokenized input; `raw` supplies the punctuation counts
    pub fn score_tokens<S: AsRef<str>>(&self, tokens: &[S], raw: &str) -> SentimentRecord {
        self.score(&SentiText::from_tokens(tokens, raw))
    }

    pub fn score(&self, text: &SentiText) -> SentimentRecord {
        let aggregator = ScoreAggregator::new(&self.config);
        let sentiments = aggregator.but_check(&text.lower(), self.token_valences(text));
        let record = aggregator.aggregate(&sentiments, text.raw());
        debug!(
            tokens = text.len(),
            compound = record.compound,
            "sentence scored"
        );
        record
    }

    /// Adjusted valence per token, before the but-check.
    ///
    /// Booster words and the "kind" of "kind of" score 0; so does any token
    /// missing from the lexicon.
    pub fn token_valences(&self, text: &SentiText) -> Vec<f64> {
        let adjuster = ValenceAdjuster::new(&self.config, &self.dictionaries);
        let tokens = text.tokens();
        let lower = text.lower();
        let cap_differential = text.cap_differential();

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, word) in lower.iter().enumerate() {
            if self.dictionaries.booster_scalar(word).is_some() {
                sentiments.push(0.0);
                continue;
            }
            if *word == "kind" && lower.get(i + 1) == Some(&"of") {
                sentiments.push(0.0);
                continue;
            }

            let valence = match self.lexicon.valence_of(word) {
                Some(base) => {
                    adjuster.adjust(&self.lexicon, tokens, &lower, cap_differential, i, base)
                }
                None => 0.0,
            };
            sentiments.push(valence);
        }
        sentiments
    }
}

// =============================================================================
// TESTS
// =============================================================================
