//! Token structures for tokenized sentences

use serde::{Deserialize, Serialize};

/// One word or emoticon of a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Original text
    pub text: String,
    /// Lowercase form used for every dictionary lookup
    pub lower: String,
    /// Has at least one cased letter and no lowercase letter
    pub is_upper: bool,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        let is_upper = is_upper(&text);
        Self { text, lower, is_upper }
    }

    /// ALL-CAPS counts as emphasis only when the sentence has a caps differential
    pub fn emphasized(&self, cap_differential: bool) -> bool {
        self.is_upper && cap_differential
    }
}

/// Uppercase test with the usual string semantics: `"VADER"` and `"OK!"` are
/// upper, `"!!"` and `":)"` are not.
pub fn is_upper(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
