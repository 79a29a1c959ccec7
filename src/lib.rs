//! vader: rule-based valence scoring for short texts
//!
//! Pipeline: raw text → SentiText → per-token valences (booster, negation,
//! caps emphasis) → but-check → punctuation emphasis → normalized record

pub mod core;
pub mod types;

// =============================================================================
// BOOSTER / DAMPENER [C] - Empirically derived mean intensity increments
// =============================================================================

/// Scalar added by a booster word ("very", "extremely", ...)
pub const B_INCR: f64 = 0.293;

/// Scalar added by a dampener word ("slightly", "kind of", ...)
pub const B_DECR: f64 = -0.293;

/// Extra emphasis for an ALL-CAPS booster in a mixed-case sentence
pub const C_INCR: f64 = 0.733;

/// Scalar applied to the second word back when it boosts
pub const SECOND_WORD_DECAY: f64 = 0.95;

/// Scalar applied to the third word back when it boosts
pub const THIRD_WORD_DECAY: f64 = 0.90;

// =============================================================================
// NEGATION [C]
// =============================================================================

/// Dampened negation, not a full flip
pub const N_SCALAR: f64 = -0.74;

/// "never so good" / "never this good" intensifies instead of negating
pub const NEGATION_IDIOM_SCALE: f64 = 1.25;

// =============================================================================
// AGGREGATION [C]
// =============================================================================

/// Weight shift around a contrastive conjunction
pub const BUT_SCALE: f64 = 0.5;

/// Normalization alpha, approximates the max expected sentence sum
pub const NORMALIZE_ALPHA: f64 = 15.0;

/// Exclamation marks beyond this count add nothing
pub const MAX_EXCLAMATIONS: usize = 4;

/// Per-mark amplifier for `!`
pub const EXCLAMATION_SCALE: f64 = 0.292;

/// Per-mark amplifier for `?` (2 or 3 marks)
pub const QUESTION_SCALE: f64 = 0.18;

/// Flat amplifier for more than 3 `?`
pub const MAX_QUESTION_AMPLIFIER: f64 = 0.96;

/// Contrastive conjunction that reweights clauses
pub const CONTRASTIVE_CONJUNCTION: &str = "but";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
