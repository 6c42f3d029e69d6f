use crate::utils::error::{CurriculumError, Result};
use regex::Regex;

pub const DEFAULT_DAY_KEYWORD: &str = "Dag";

/// One line of source text with its 0-based position in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub index: usize,
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    DayBoundary {
        /// The numeral printed in the source. Informational only.
        number_hint: Option<u32>,
        title: &'a str,
    },
    Candidate(&'a str),
}

#[derive(Debug, Clone)]
pub struct LineClassifier {
    day_marker: Regex,
}

impl LineClassifier {
    pub fn new(day_keyword: &str) -> Result<Self> {
        let pattern = format!(r"(?i){}\s+([0-9]+)\s*[–—]\s*(.+)", regex::escape(day_keyword));
        let day_marker = Regex::new(&pattern).map_err(|e| CurriculumError::ConfigError {
            message: format!("Invalid day marker for keyword '{}': {}", day_keyword, e),
        })?;
        Ok(Self { day_marker })
    }

    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let line = line.trim();
        if line.is_empty() || is_lone_punctuation(line) {
            return LineKind::Blank;
        }

        if let Some(caps) = self.day_marker.captures(line) {
            let title = caps.get(2).map_or("", |m| m.as_str().trim());
            if !title.is_empty() {
                let number_hint = caps.get(1).and_then(|m| m.as_str().parse().ok());
                return LineKind::DayBoundary { number_hint, title };
            }
        }

        LineKind::Candidate(line)
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self {
            day_marker: Regex::new(r"(?i)Dag\s+([0-9]+)\s*[–—]\s*(.+)")
                .expect("default day marker is a valid pattern"),
        }
    }
}

fn is_lone_punctuation(line: &str) -> bool {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            c.is_ascii_punctuation() || matches!(c, '。' | '、' | '・' | '…' | '–' | '—')
        }
        _ => false,
    }
}
