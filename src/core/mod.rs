//! Core modules for vader

pub mod adjuster;
pub mod aggregator;
pub mod analyzer;
pub mod lexicon;
pub mod punctuation;
pub mod senti_text;

pub use adjuster::{NegationRule, ValenceAdjuster};
pub use aggregator::{normalize, sift_sentiment_scores, ScoreAggregator};
pub use analyzer::SentimentAnalyzer;
pub use lexicon::{
    is_negated, BoosterDict, ContextDictionaries, Lexicon, LexiconLookup, NegationSet,
};
pub use punctuation::punctuation_emphasis;
pub use senti_text::SentiText;
