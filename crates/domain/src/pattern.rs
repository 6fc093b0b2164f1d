// crates/domain/src/pattern.rs
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use wildsweep_shared_kernel::{DomainError, DomainResult};

/// Literal words are fenced by doubled asterisks: `[**word**]`.
const WORD_DELIMITER: &str = "**";

/// Shape of a parsed wildcard token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// `[.js]`
    ExactExtension,
    /// `[**example**]`
    SingleWord,
    /// `[**example**.js]`
    WordAndExtension,
    /// `[**example**other**]`
    MultipleWords,
    /// `[**example**other.js]`
    MultipleWordsAndExtension,
}

impl PatternKind {
    pub const fn has_extension(self) -> bool {
        matches!(
            self,
            Self::ExactExtension | Self::WordAndExtension | Self::MultipleWordsAndExtension
        )
    }

    const fn classify(word_count: usize, has_extension: bool) -> Self {
        match (word_count > 1, has_extension) {
            (false, false) => Self::SingleWord,
            (false, true) => Self::WordAndExtension,
            (true, false) => Self::MultipleWords,
            (true, true) => Self::MultipleWordsAndExtension,
        }
    }
}

/// A validated wildcard token.
///
/// `words` is empty only for [`PatternKind::ExactExtension`]; `extension` is present
/// exactly when [`PatternKind::has_extension`] holds and always starts with a dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    kind: PatternKind,
    words: Vec<String>,
    extension: Option<String>,
}

impl Pattern {
    /// Parse a raw token such as `[**build**.log]`.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidPattern`] with the detail `Invalid wildcard.` when the
    /// token is not bracketed, has an odd number of `*`, or has no recognisable shape.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let invalid = || DomainError::invalid_wildcard(raw);

        let inner = raw
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .filter(|s| !s.is_empty())
            .ok_or_else(invalid)?;

        let asterisks = inner.chars().filter(|&c| c == '*').count();
        if asterisks == 0 {
            if inner.starts_with('.') && inner.len() > 1 {
                return Ok(Self {
                    raw: raw.to_string(),
                    kind: PatternKind::ExactExtension,
                    words: Vec::new(),
                    extension: Some(inner.to_string()),
                });
            }
            return Err(invalid());
        }
        if asterisks % 2 != 0 || asterisks < 2 * WORD_DELIMITER.len() {
            return Err(invalid());
        }

        let body = inner.strip_prefix(WORD_DELIMITER).ok_or_else(invalid)?;
        let mut segments: Vec<&str> = body.split(WORD_DELIMITER).collect();
        if segments.iter().any(|s| s.contains('*')) {
            return Err(invalid());
        }

        // `split` always yields at least one segment.
        let tail = segments.pop().unwrap_or_default();
        let (tail_word, extension) = split_tail(tail).ok_or_else(invalid)?;

        let words: Vec<String> = segments
            .into_iter()
            .chain(std::iter::once(tail_word))
            .filter(|w| !w.is_empty())
            .map(str::to_owned)
            .collect();
        if words.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            raw: raw.to_string(),
            kind: PatternKind::classify(words.len(), extension.is_some()),
            words,
            extension,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

/// Splits the text after the last `**` into an optional trailing word and an extension.
/// `None` means the tail ends in a bare dot.
fn split_tail(tail: &str) -> Option<(&str, Option<String>)> {
    match tail.rfind('.') {
        None => Some((tail, None)),
        Some(idx) => {
            let ext = &tail[idx + 1..];
            if ext.is_empty() {
                return None;
            }
            Some((&tail[..idx], Some(format!(".{ext}"))))
        }
    }
}

impl FromStr for Pattern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
