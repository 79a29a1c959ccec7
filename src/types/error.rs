//! Errors raised while loading lexicons and configuration.
//! Scoring itself never fails.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Line lacks the `token<TAB>valence` prefix
    #[error("lexicon line {line}: expected `token<TAB>valence`, got {content:?}")]
    MalformedLexiconLine { line: usize, content: String },

    #[error("lexicon line {line}: invalid valence {value:?} for token {token:?}")]
    InvalidValence {
        line: usize,
        token: String,
        value: String,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
