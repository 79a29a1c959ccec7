//! Tunable constants of the valence pipeline

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::LoadError;
use crate::{
    BUT_SCALE, CONTRASTIVE_CONJUNCTION, C_INCR, EXCLAMATION_SCALE, MAX_EXCLAMATIONS,
    MAX_QUESTION_AMPLIFIER, NEGATION_IDIOM_SCALE, NORMALIZE_ALPHA, N_SCALAR, QUESTION_SCALE,
    SECOND_WORD_DECAY, THIRD_WORD_DECAY,
};

/// Immutable scoring configuration.
///
/// `Default` reproduces the reference calibration; any field missing from a
/// JSON override keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValenceConfig {
    /// Extra booster emphasis when the booster is ALL-CAPS
    pub caps_increment: f64,
    /// General negation multiplier
    pub negation_scalar: f64,
    /// Multiplier for "never so" / "never this"
    pub negation_idiom_scale: f64,
    /// Decay for a booster two words back
    pub second_word_decay: f64,
    /// Decay for a booster three words back
    pub third_word_decay: f64,
    pub but_scale: f64,
    pub contrastive_conjunction: String,
    pub normalize_alpha: f64,
    pub max_exclamations: usize,
    pub exclamation_scale: f64,
    pub question_scale: f64,
    pub max_question_amplifier: f64,
}

impl Default for ValenceConfig {
    fn default() -> Self {
        Self {
            caps_increment: C_INCR,
            negation_scalar: N_SCALAR,
            negation_idiom_scale: NEGATION_IDIOM_SCALE,
            second_word_decay: SECOND_WORD_DECAY,
            third_word_decay: THIRD_WORD_DECAY,
            but_scale: BUT_SCALE,
            contrastive_conjunction: CONTRASTIVE_CONJUNCTION.to_string(),
            normalize_alpha: NORMALIZE_ALPHA,
            max_exclamations: MAX_EXCLAMATIONS,
            exclamation_scale: EXCLAMATION_SCALE,
            question_scale: QUESTION_SCALE,
            max_question_amplifier: MAX_QUESTION_AMPLIFIER,
        }
    }
}

impl ValenceConfig {
    /// Parse JSON overrides on top of the defaults
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Scale for a booster `distance` words back (1..=3)
    pub fn booster_decay(&self, distance: usize) -> f64 {
        match distance {
            2 => self.second_word_decay,
            3 => self.third_word_decay,
            _ => 1.0,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
