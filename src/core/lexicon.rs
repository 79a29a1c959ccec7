//! Lexicon and context dictionaries consumed by the valence engine
//!
//! The engine only sees the three lookup traits; `Lexicon` and
//! `ContextDictionaries` are the shipped implementations.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::types::LoadError;
use crate::{B_DECR, B_INCR};

/// Word → base valence
pub trait LexiconLookup {
    /// Base valence of a lowercase token, `None` if absent
    fn valence_of(&self, lower: &str) -> Option<f64>;

    fn contains(&self, lower: &str) -> bool {
        self.valence_of(lower).is_some()
    }
}

pub trait NegationSet {
    fn is_negation_word(&self, lower: &str) -> bool;
}

/// Booster / dampener word → scalar
pub trait BoosterDict {
    fn booster_scalar(&self, lower: &str) -> Option<f64>;
}

impl LexiconLookup for HashMap<String, f64> {
    fn valence_of(&self, lower: &str) -> Option<f64> {
        self.get(lower).copied()
    }
}

/// A word is negating if it is listed, or carries an "n't" contraction
pub fn is_negated<N: NegationSet + ?Sized>(negations: &N, lower: &str) -> bool {
    negations.is_negation_word(lower) || lower.contains("n't")
}

// =============================================================================
// LEXICON
// =============================================================================

/// In-memory sentiment lexicon
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one entry
    pub fn with_entry(mut self, token: &str, valence: f64) -> Self {
        self.entries.insert(token.to_lowercase(), valence);
        self
    }

    /// Parse the tab-separated lexicon format:
    /// `token<TAB>mean<TAB>stddev<TAB>[ratings]`. Only the first two
    /// fields are read.
    pub fn from_tsv_str(source: &str) -> Result<Self, LoadError> {
        let mut entries = HashMap::new();

        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            let (token, value) = match (fields.next(), fields.next()) {
                (Some(token), Some(value)) if !token.is_empty() => (token, value.trim()),
                _ => {
                    return Err(LoadError::MalformedLexiconLine {
                        line: idx + 1,
                        content: raw.to_string(),
                    })
                }
            };

            let invalid = || LoadError::InvalidValence {
                line: idx + 1,
                token: token.to_string(),
                value: value.to_string(),
            };
            let valence: f64 = value.parse().map_err(|_| invalid())?;
            if !valence.is_finite() {
                return Err(invalid());
            }
            entries.insert(token.to_lowercase(), valence);
        }

        Ok(Self { entries })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_tsv_str(&source)?;
        tracing::info!(entries = lexicon.len(), path = %path.display(), "lexicon loaded");
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LexiconLookup for Lexicon {
    fn valence_of(&self, lower: &str) -> Option<f64> {
        self.entries.get(lower).copied()
    }
}

// =============================================================================
// CONTEXT DICTIONARIES
// =============================================================================

/// Negation words, with and without apostrophes
const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
    "ain't", "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't",
    "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
    "don't", "hadn't", "hasn't", "haven't", "isn't", "mightn't", "mustn't",
    "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
    "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't",
    "without", "wont", "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
];

const BOOSTERS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
    "decidedly", "deeply", "effing", "enormous", "enormously", "entirely", "especially",
    "exceptional", "exceptionally", "extreme", "extremely", "fabulously", "flipping",
    "flippin", "frackin", "fracking", "fricking", "frickin", "frigging", "friggin",
    "fully", "fuckin", "fucking", "fuggin", "fugging", "greatly", "hella", "highly",
    "hugely", "incredible", "incredibly", "intensely", "major", "majorly", "more",
    "most", "particularly", "purely", "quite", "really", "remarkably", "so",
    "substantially", "thoroughly", "total", "totally", "tremendous", "tremendously",
    "uber", "unbelievably", "unusually", "utter", "utterly", "very",
];

const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof", "kind-of",
    "less", "little", "marginal", "marginally", "occasional", "occasionally", "partly",
    "scarce", "scarcely", "slight", "slightly", "somewhat", "sort of", "sorta", "sortof",
    "sort-of",
];

/// Negation set plus booster/dampener dictionary
#[derive(Debug, Clone)]
pub struct ContextDictionaries {
    negations: HashSet<String>,
    boosters: HashMap<String, f64>,
}

impl Default for ContextDictionaries {
    fn default() -> Self {
        let negations = NEGATE.iter().map(|w| w.to_string()).collect();
        let boosters = BOOSTERS
            .iter()
            .map(|w| (w.to_string(), B_INCR))
            .chain(DAMPENERS.iter().map(|w| (w.to_string(), B_DECR)))
            .collect();
        Self { negations, boosters }
    }
}

impl ContextDictionaries {
    /// Empty dictionaries, for callers supplying their own word lists
    pub fn empty() -> Self {
        Self {
            negations: HashSet::new(),
            boosters: HashMap::new(),
        }
    }

    pub fn with_negation(mut self, word: &str) -> Self {
        self.negations.insert(word.to_lowercase());
        self
    }

    pub fn with_booster(mut self, word: &str, scalar: f64) -> Self {
        self.boosters.insert(word.to_lowercase(), scalar);
        self
    }
}

impl NegationSet for ContextDictionaries {
    fn is_negation_word(&self, lower: &str) -> bool {
        self.negations.contains(lower)
    }
}

impl BoosterDict for ContextDictionaries {
    fn booster_scalar(&self, lower: &str) -> Option<f64> {
        self.boosters.get(lower).copied()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "good\t1.9\t0.9434\t[2, 1, 2, 3, 2, 2, 2, 1, 2, 2]\n\
                          bad\t-2.5\t0.67082\t[-2, -3, -3, -2, -3, -3, -2, -2, -3, -2]\n\
                          \n\
                          :)\t2.0\t1.18322\t[2, 2, 1, 1, 1, 1, 4, 3, 4, 1]\n";

    #[test]
    fn test_parse_tsv() {
        let lexicon = Lexicon::from_tsv_str(SAMPLE).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.valence_of("good"), Some(1.9));
        assert_eq!(lexicon.valence_of("bad"), Some(-2.5));
        assert_eq!(lexicon.valence_of(":)"), Some(2.0));
        assert_eq!(lexicon.valence_of("meh"), None);
    }

    #[test]
    fn test_keys_are_lowercased() {
        let lexicon = Lexicon::from_tsv_str("GREAT\t3.1").unwrap();
        assert!(lexicon.contains("great"));
        assert!(!lexicon.contains("GREAT"));
    }

    #[test]
    fn test_missing_tab_is_malformed() {
        let err = Lexicon::from_tsv_str("good\t1.9\nbroken line").unwrap_err();
        match err {
            LoadError::MalformedLexiconLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_valence() {
        let err = Lexicon::from_tsv_str("good\tvery").unwrap_err();
        assert!(matches!(err, LoadError::InvalidValence { line: 1, .. }));
    }

    #[test]
    fn test_non_finite_valence() {
        let err = Lexicon::from_tsv_str("good\tinf\t0\t[]").unwrap_err();
        assert!(matches!(err, LoadError::InvalidValence { line: 1, .. }));

        let err = Lexicon::from_tsv_str("good\t1.9\nbad\tNaN\t0\t[]").unwrap_err();
        assert!(matches!(err, LoadError::InvalidValence { line: 2, .. }));

        assert!(Lexicon::from_tsv_str("good\t-infinity").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Lexicon::from_path("/nonexistent/vader_lexicon.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_default_dictionaries() {
        let dicts = ContextDictionaries::default();
        assert!(dicts.is_negation_word("not"));
        assert!(dicts.is_negation_word("without"));
        assert!(!dicts.is_negation_word("very"));
        assert_eq!(dicts.booster_scalar("very"), Some(B_INCR));
        assert_eq!(dicts.booster_scalar("slightly"), Some(B_DECR));
        assert_eq!(dicts.booster_scalar("good"), None);
    }

    #[test]
    fn test_contraction_negates() {
        let dicts = ContextDictionaries::empty();
        assert!(is_negated(&dicts, "shouldn't"));
        assert!(!is_negated(&dicts, "not"));
        assert!(is_negated(&dicts.with_negation("not"), "not"));
    }

    #[test]
    fn test_hashmap_lookup() {
        let mut map = HashMap::new();
        map.insert("good".to_string(), 1.9);
        assert!(map.contains("good"));
        assert_eq!(LexiconLookup::valence_of(&map, "bad"), None);
    }
}
