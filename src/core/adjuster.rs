//! Per-token valence adjuster
//!
//! Looks up to three tokens back from a sentiment-bearing word:
//! - booster/dampener words scale the valence (decaying with distance)
//! - ALL-CAPS boosters in a mixed-case sentence add extra emphasis
//! - negation words dampen and flip the valence
//! - "never so"/"never this" intensify, "without doubt" cancels negation

use tracing::trace;

use crate::core::lexicon::{is_negated, BoosterDict, LexiconLookup, NegationSet};
use crate::types::{Token, ValenceConfig};

/// Widest context window examined behind a sentiment word
pub const MAX_WINDOW: usize = 3;

/// Rule selected for one negation window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegationRule {
    /// Nothing negating in the window
    Unchanged,
    /// General negation: multiply by the negation scalar
    Negate,
    /// "never so" / "never this": multiply by the idiom scale
    NeverSo,
    /// "without doubt": valence kept as is
    WithoutDoubt,
}

impl NegationRule {
    pub fn apply(self, valence: f64, config: &ValenceConfig) -> f64 {
        match self {
            NegationRule::Unchanged | NegationRule::WithoutDoubt => valence,
            NegationRule::Negate => valence * config.negation_scalar,
            NegationRule::NeverSo => valence * config.negation_idiom_scale,
        }
    }
}

fn is_so_or_this(word: &str) -> bool {
    word == "so" || word == "this"
}

/// Adjusts base valences using the preceding context
#[derive(Debug)]
pub struct ValenceAdjuster<'a, D> {
    config: &'a ValenceConfig,
    dictionaries: &'a D,
}

impl<'a, D: NegationSet + BoosterDict> ValenceAdjuster<'a, D> {
    pub fn new(config: &'a ValenceConfig, dictionaries: &'a D) -> Self {
        Self {
            config,
            dictionaries,
        }
    }

    /// Scalar contributed by `word` when it precedes a word of `valence`.
    ///
    /// Zero unless `word` is a booster/dampener. The sign tracks the sign of
    /// the modified word, so a booster before a negative word pushes further
    /// negative.
    pub fn scalar_inc_dec(&self, word: &Token, valence: f64, cap_differential: bool) -> f64 {
        let Some(mut scalar) = self.dictionaries.booster_scalar(&word.lower) else {
            return 0.0;
        };
        if valence < 0.0 {
            scalar *= -1.0;
        }
        if word.emphasized(cap_differential) {
            if valence > 0.0 {
                scalar += self.config.caps_increment;
            } else {
                scalar -= self.config.caps_increment;
            }
        }
        scalar
    }

    /// Pick the negation rule for a window of lowercase tokens.
    ///
    /// `preceding` holds the window in sentence order, so `preceding[0]` is
    /// the farthest token and the window size is `preceding.len()`.
    pub fn negation_rule(&self, preceding: &[&str]) -> NegationRule {
        let negates = |w: &str| is_negated(self.dictionaries, w);

        match *preceding {
            [one] => {
                if negates(one) {
                    NegationRule::Negate
                } else {
                    NegationRule::Unchanged
                }
            }
            [far, near] => {
                if far == "never" && is_so_or_this(near) {
                    NegationRule::NeverSo
                } else if far == "without" && near == "doubt" {
                    NegationRule::WithoutDoubt
                } else if negates(far) {
                    NegationRule::Negate
                } else {
                    NegationRule::Unchanged
                }
            }
            [far, mid, near] => {
                if far == "never" && (is_so_or_this(mid) || is_so_or_this(near)) {
                    NegationRule::NeverSo
                } else if far == "without" && (mid == "doubt" || near == "doubt") {
                    NegationRule::WithoutDoubt
                } else if negates(far) {
                    NegationRule::Negate
                } else {
                    NegationRule::Unchanged
                }
            }
            _ => NegationRule::Unchanged,
        }
    }

    pub fn negation_check(&self, valence: f64, preceding: &[&str]) -> f64 {
        self.negation_rule(preceding).apply(valence, self.config)
    }

    /// "least" negates ("least good"), except in "at least" / "very least"
    pub fn least_check<L: LexiconLookup>(
        &self,
        lexicon: &L,
        valence: f64,
        lower: &[&str],
        i: usize,
    ) -> f64 {
        if i == 0 {
            return valence;
        }
        let prev = lower[i - 1];
        if prev != "least" || lexicon.contains(prev) {
            return valence;
        }
        if i > 1 && (lower[i - 2] == "at" || lower[i - 2] == "very") {
            return valence;
        }
        valence * self.config.negation_scalar
    }

    /// Adjusted valence of the token at `i`, starting from its base valence
    pub fn adjust<L: LexiconLookup>(
        &self,
        lexicon: &L,
        tokens: &[Token],
        lower: &[&str],
        cap_differential: bool,
        i: usize,
        base: f64,
    ) -> f64 {
        let mut valence = base;

        for distance in 1..=MAX_WINDOW {
            if i < distance {
                break;
            }
            let prev = &tokens[i - distance];
            if lexicon.contains(&prev.lower) {
                continue;
            }

            let mut scalar = self.scalar_inc_dec(prev, valence, cap_differential);
            if scalar != 0.0 {
                scalar *= self.config.booster_decay(distance);
            }
            valence += scalar;
            valence = self.negation_check(valence, &lower[i - distance..i]);
        }

        let valence = self.least_check(lexicon, valence, lower, i);
        trace!(token = %tokens[i].text, base, adjusted = valence, "valence adjusted");
        valence
    }
}

// =============================================================================
// TESTS
// =============================================================================
