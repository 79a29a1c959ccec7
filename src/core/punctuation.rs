//! Punctuation emphasis: `!` and `?` push polarity further out
//!
//! Exclamations saturate by clamping the count, question marks by
//! clamping the output.

use crate::types::ValenceConfig;

/// Additive amplifier derived from `!` and `?` counts in the raw text
pub fn punctuation_emphasis(text: &str, config: &ValenceConfig) -> f64 {
    amplify_exclamations(text, config) + amplify_questions(text, config)
}

pub fn amplify_exclamations(text: &str, config: &ValenceConfig) -> f64 {
    let count = text.matches('!').count().min(config.max_exclamations);
    count as f64 * config.exclamation_scale
}

pub fn amplify_questions(text: &str, config: &ValenceConfig) -> f64 {
    match text.matches('?').count() {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * config.question_scale,
        _ => config.max_question_amplifier,
    }
}

// =============================================================================
// TESTS
// =============================================================================
