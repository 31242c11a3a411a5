//! Name transformation strategies.
//!
//! - `ExactMatch`: literal, non-overlapping, left-to-right replace.
//! - `RegexMatch`: global regex replace with `$1`-style back-references.
//! - `CaseInsensitive`: decorator that re-runs the wrapped strategy's match
//!   case-insensitively, using the `PatternSource` capability instead of
//!   knowing which concrete strategy it wraps.
//!
//! Strategies are immutable once built; construct one per preview.

use regex::{NoExpand, Regex};
use tracing::trace;

use crate::errors::RenameError;

/// Inline flag that turns on case-insensitive matching.
const CASE_INSENSITIVE_FLAG: &str = "(?i)";

/// Pattern text a strategy was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSource<'a> {
    pub pattern: &'a str,
    pub replacement: &'a str,
    /// True when `pattern` is literal text and must be escaped before use as a regex.
    pub needs_literal_escaping: bool,
}

/// A pure name -> name transformation.
pub trait RenameStrategy: std::fmt::Debug {
    fn apply(&self, name: &str) -> String;

    /// Pattern text for decorators. Strategies without one return `None`
    /// and are decorated by plain delegation.
    fn source(&self) -> Option<PatternSource<'_>> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct ExactMatch {
    pattern: String,
    replacement: String,
}

impl ExactMatch {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

impl RenameStrategy for ExactMatch {
    fn apply(&self, name: &str) -> String {
        // Empty pattern: no-op rather than inserting between every char.
        if self.pattern.is_empty() {
            return name.to_string();
        }
        name.replace(&self.pattern, &self.replacement)
    }

    fn source(&self) -> Option<PatternSource<'_>> {
        Some(PatternSource {
            pattern: &self.pattern,
            replacement: &self.replacement,
            needs_literal_escaping: true,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RegexMatch {
    pattern: String,
    regex: Regex,
    replacement: String,
}

impl RegexMatch {
    /// Compile `pattern`; invalid syntax fails here, before any file is touched.
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Result<Self, RenameError> {
        let pattern = pattern.into();
        let regex = compile(&pattern)?;
        Ok(Self {
            pattern,
            regex,
            replacement: replacement.into(),
        })
    }
}

impl RenameStrategy for RegexMatch {
    fn apply(&self, name: &str) -> String {
        self.regex
            .replace_all(name, self.replacement.as_str())
            .into_owned()
    }

    fn source(&self) -> Option<PatternSource<'_>> {
        Some(PatternSource {
            pattern: &self.pattern,
            replacement: &self.replacement,
            needs_literal_escaping: false,
        })
    }
}

#[derive(Debug)]
enum Folding {
    Regex {
        regex: Regex,
        replacement: String,
        /// Literal replacements must not expand `$name` references.
        literal: bool,
    },
    Noop,
    Delegate,
}

/// Case-insensitive decorator over any strategy.
#[derive(Debug)]
pub struct CaseInsensitive {
    inner: Box<dyn RenameStrategy>,
    folding: Folding,
}

impl CaseInsensitive {
    pub fn new(inner: Box<dyn RenameStrategy>) -> Result<Self, RenameError> {
        let folding = match inner.source() {
            None => {
                trace!("case-insensitive: wrapped strategy has no pattern source; delegating");
                Folding::Delegate
            }
            Some(src) if src.needs_literal_escaping && src.pattern.is_empty() => Folding::Noop,
            Some(src) => {
                let body = if src.needs_literal_escaping {
                    regex::escape(src.pattern)
                } else {
                    src.pattern.to_string()
                };
                let folded = if body.starts_with(CASE_INSENSITIVE_FLAG) {
                    body
                } else {
                    format!("{CASE_INSENSITIVE_FLAG}{body}")
                };
                Folding::Regex {
                    regex: compile(&folded)?,
                    replacement: src.replacement.to_string(),
                    literal: src.needs_literal_escaping,
                }
            }
        };
        Ok(Self { inner, folding })
    }
}

impl RenameStrategy for CaseInsensitive {
    fn apply(&self, name: &str) -> String {
        match &self.folding {
            Folding::Regex {
                regex,
                replacement,
                literal: true,
            } => regex.replace_all(name, NoExpand(replacement.as_str())).into_owned(),
            Folding::Regex { regex, replacement, .. } => {
                regex.replace_all(name, replacement.as_str()).into_owned()
            }
            Folding::Noop => name.to_string(),
            Folding::Delegate => self.inner.apply(name),
        }
    }
}

/// Build the strategy selected by the user's flags.
pub fn build_strategy(
    pattern: &str,
    replacement: &str,
    is_regex: bool,
    case_insensitive: bool,
) -> Result<Box<dyn RenameStrategy>, RenameError> {
    let base: Box<dyn RenameStrategy> = if is_regex {
        Box::new(RegexMatch::new(pattern, replacement)?)
    } else {
        Box::new(ExactMatch::new(pattern, replacement))
    };
    if case_insensitive {
        Ok(Box::new(CaseInsensitive::new(base)?))
    } else {
        Ok(base)
    }
}

fn compile(pattern: &str) -> Result<Regex, RenameError> {
    Regex::new(pattern).map_err(|source| RenameError::PatternCompilation {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Upper;

    impl RenameStrategy for Upper {
        fn apply(&self, name: &str) -> String {
            name.to_uppercase()
        }
    }

    #[test]
    fn decorator_delegates_without_source() {
        let s = CaseInsensitive::new(Box::new(Upper)).unwrap();
        assert_eq!(s.apply("abc.txt"), "ABC.TXT");
    }

    #[test]
    fn literal_replacement_is_not_expanded() {
        let s = CaseInsensitive::new(Box::new(ExactMatch::new("price", "$1"))).unwrap();
        assert_eq!(s.apply("PRICE.txt"), "$1.txt");
    }

    #[test]
    fn existing_flag_is_not_doubled() {
        let base = RegexMatch::new("(?i)abc", "x").unwrap();
        let s = CaseInsensitive::new(Box::new(base)).unwrap();
        assert_eq!(s.apply("ABC.txt"), "x.txt");
    }
}
