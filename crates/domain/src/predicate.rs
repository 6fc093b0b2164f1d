// crates/domain/src/predicate.rs
use wildsweep_shared_kernel::DomainResult;

use crate::pattern::{Pattern, PatternKind};

/// Decides whether a file should be deleted, from its absolute path alone.
///
/// Words are tested as substrings of the *whole* path, so a word that occurs in an
/// ancestor directory name matches every file below that directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    source: String,
    words: Vec<String>,
    suffix: Option<String>,
}

/// Compile a parsed pattern into its predicate.
pub fn compile(pattern: &Pattern) -> Predicate {
    let words = match pattern.kind() {
        PatternKind::ExactExtension => Vec::new(),
        PatternKind::SingleWord | PatternKind::WordAndExtension => {
            pattern.words().iter().take(1).cloned().collect()
        }
        PatternKind::MultipleWords | PatternKind::MultipleWordsAndExtension => {
            pattern.words().to_vec()
        }
    };
    let suffix = if pattern.kind().has_extension() {
        pattern.extension().map(str::to_owned)
    } else {
        None
    };

    Predicate {
        source: pattern.raw().to_string(),
        words,
        suffix,
    }
}

/// Parse and compile tokens in order. The first malformed token aborts.
///
/// # Errors
/// Returns the parser's `InvalidPattern` error for the first malformed token.
pub fn compile_all<I, S>(tokens: I) -> DomainResult<PredicateSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| Pattern::parse(t.as_ref()).map(|p| compile(&p)))
        .collect()
}

impl Predicate {
    pub fn matches(&self, path: &str) -> bool {
        self.words.iter().all(|w| path.contains(w.as_str()))
            && self.suffix.as_deref().is_none_or(|s| path.ends_with(s))
    }

    /// The raw token this predicate was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Ordered predicates, evaluated with short-circuit on the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet(Vec<Predicate>);

impl PredicateSet {
    pub fn first_match(&self, path: &str) -> Option<&Predicate> {
        self.0.iter().find(|p| p.matches(path))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One set per predicate, preserving order.
    pub fn split(&self) -> Vec<PredicateSet> {
        self.0.iter().cloned().map(|p| Self(vec![p])).collect()
    }
}

impl FromIterator<Predicate> for PredicateSet {
    fn from_iter<T: IntoIterator<Item = Predicate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
