//! Recovers `(term, reading, translation)` triples from entry lines.
//!
//! Two strategies are tried in priority order:
//!
//! 1. [`match_strict`]: `N. term – reading – translation` with all three
//!    segments present.
//! 2. [`match_lenient`]: `N. term – remainder`, where the remainder is split
//!    on the separators when it holds exactly two parts and is otherwise taken
//!    whole as the translation.
//!
//! The strict tier wins whenever it matches because it separates the reading
//! from the translation reliably.

use crate::domain::model::{EntryRejected, VocabularyEntry};
use regex::Regex;
use std::sync::OnceLock;

const SEPARATORS: [char; 2] = ['–', '—'];

static STRICT_PATTERN: OnceLock<Regex> = OnceLock::new();
static LENIENT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn strict_pattern() -> &'static Regex {
    STRICT_PATTERN.get_or_init(|| {
        Regex::new(
            r"^[0-9]+\.\s+([\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}]+)\s*[–—]\s*([^–—]+)\s*[–—]\s*(.+)",
        )
        .expect("strict entry pattern is valid")
    })
}

fn lenient_pattern() -> &'static Regex {
    LENIENT_PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9]+\.\s+([\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}]+)\s*[–—]\s*(.+)")
            .expect("lenient entry pattern is valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternMatch<'a> {
    Matched {
        term: &'a str,
        reading: &'a str,
        translation: &'a str,
    },
    NoMatch,
}

pub fn match_strict(line: &str) -> PatternMatch<'_> {
    let Some(caps) = strict_pattern().captures(line) else {
        return PatternMatch::NoMatch;
    };

    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str().trim());
    let (term, reading, translation) = (field(1), field(2), field(3));

    if term.is_empty() || reading.is_empty() || translation.is_empty() {
        return PatternMatch::NoMatch;
    }

    PatternMatch::Matched {
        term,
        reading,
        translation,
    }
}

pub fn match_lenient(line: &str) -> PatternMatch<'_> {
    let Some(caps) = lenient_pattern().captures(line) else {
        return PatternMatch::NoMatch;
    };

    let term = caps.get(1).map_or("", |m| m.as_str().trim());
    let rest = caps.get(2).map_or("", |m| m.as_str().trim());

    let parts: Vec<&str> = rest.split(SEPARATORS).map(str::trim).collect();
    let (reading, translation) = match parts.as_slice() {
        [reading, translation] => (*reading, *translation),
        _ => ("", rest),
    };

    PatternMatch::Matched {
        term,
        reading,
        translation,
    }
}

/// Why a candidate line did not produce an entry. Never leaves the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unparseable {
    NoPattern,
    Rejected(EntryRejected),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EntryResolver;

impl EntryResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, line: &str) -> Result<VocabularyEntry, Unparseable> {
        let strategies: [fn(&str) -> PatternMatch<'_>; 2] = [match_strict, match_lenient];

        for strategy in strategies {
            if let PatternMatch::Matched {
                term,
                reading,
                translation,
            } = strategy(line)
            {
                return VocabularyEntry::new(term, reading, translation)
                    .map_err(Unparseable::Rejected);
            }
        }

        Err(Unparseable::NoPattern)
    }
}
