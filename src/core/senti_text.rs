//! SentiText: raw text split into words and emoticons
//!
//! Punctuation is stripped from word edges, but short pieces such as `:)`
//! or `!!` are kept whole so emoticons survive.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Token;

lazy_static! {
    static ref RE_TOKEN: Regex = Regex::new(r"\S+").unwrap();
}

/// Tokenized sentence with its caps differential
#[derive(Debug, Clone)]
pub struct SentiText {
    raw: String,
    tokens: Vec<Token>,
    cap_differential: bool,
}

impl SentiText {
    /// Tokenize raw text
    pub fn new(text: &str) -> Self {
        let tokens = RE_TOKEN
            .find_iter(text)
            .map(|m| Token::new(strip_punctuation(m.as_str())))
            .collect();
        Self::build(text.to_string(), tokens)
    }

    /// Use an existing tokenization; `raw` is only used for punctuation counts
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], raw: &str) -> Self {
        let tokens = tokens.iter().map(|t| Token::new(t.as_ref())).collect();
        Self::build(raw.to_string(), tokens)
    }

    fn build(raw: String, tokens: Vec<Token>) -> Self {
        let cap_differential = cap_differential(&tokens);
        Self {
            raw,
            tokens,
            cap_differential,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Lowercase forms in sentence order
    pub fn lower(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.lower.as_str()).collect()
    }

    /// Some, but not all, tokens are ALL-CAPS
    pub fn cap_differential(&self) -> bool {
        self.cap_differential
    }
}

/// Strip leading/trailing ASCII punctuation unless that leaves <= 2 chars
fn strip_punctuation(piece: &str) -> &str {
    let stripped = piece.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        piece
    } else {
        stripped
    }
}

fn cap_differential(tokens: &[Token]) -> bool {
    let upper = tokens.iter().filter(|t| t.is_upper).count();
    let mixed = tokens.len() - upper;
    mixed > 0 && mixed < tokens.len()
}

// =============================================================================
// TESTS
// =============================================================================
