use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

const HIRAGANA: (char, char) = ('\u{3040}', '\u{309F}');
const KATAKANA: (char, char) = ('\u{30A0}', '\u{30FF}');
const IDEOGRAPHS: (char, char) = ('\u{4E00}', '\u{9FAF}');
const LONG_VOWELS: [char; 10] = ['ā', 'ē', 'ī', 'ō', 'ū', 'Ā', 'Ē', 'Ī', 'Ō', 'Ū'];

fn in_range(c: char, (lo, hi): (char, char)) -> bool {
    (lo..=hi).contains(&c)
}

pub fn is_phonetic_char(c: char) -> bool {
    in_range(c, HIRAGANA) || in_range(c, KATAKANA)
}

pub fn is_term_char(c: char) -> bool {
    is_phonetic_char(c) || in_range(c, IDEOGRAPHS)
}

pub fn is_reading_char(c: char) -> bool {
    is_phonetic_char(c)
        || c.is_ascii_alphabetic()
        || c.is_whitespace()
        || c == '-'
        || LONG_VOWELS.contains(&c)
}

/// Drops every character outside the reading allowlist, then trims.
pub fn sanitize_reading(raw: &str) -> String {
    let kept: String = raw.chars().filter(|c| is_reading_char(*c)).collect();
    kept.trim().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryRejected {
    #[error("term is empty")]
    EmptyTerm,

    #[error("translation is empty")]
    EmptyTranslation,

    #[error("term contains non-script character {0:?}")]
    TermOutsideScript(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    term: String,
    reading: String,
    translation: String,
    example_sentence: String,
}

impl VocabularyEntry {
    /// Builds an entry, trimming every field and sanitizing the reading.
    pub fn new(term: &str, reading: &str, translation: &str) -> Result<Self, EntryRejected> {
        let term = term.trim();
        let translation = translation.trim();

        if term.is_empty() {
            return Err(EntryRejected::EmptyTerm);
        }
        if let Some(c) = term.chars().find(|c| !is_term_char(*c)) {
            return Err(EntryRejected::TermOutsideScript(c));
        }
        if translation.is_empty() {
            return Err(EntryRejected::EmptyTranslation);
        }

        Ok(Self {
            term: term.to_string(),
            reading: sanitize_reading(reading),
            translation: translation.to_string(),
            example_sentence: String::new(),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Always empty after extraction; filled in by other subsystems.
    pub fn example_sentence(&self) -> &str {
        &self.example_sentence
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySegment {
    day_index: u32,
    title: String,
    entries: Vec<VocabularyEntry>,
}

impl DaySegment {
    /// Returns `None` for an empty entry list; empty days are never retained.
    pub fn new(day_index: u32, title: String, entries: Vec<VocabularyEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            day_index,
            title,
            entries,
        })
    }

    pub fn day_index(&self) -> u32 {
        self.day_index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn summary(&self) -> DaySummary {
        DaySummary {
            day_index: self.day_index,
            title: self.title.clone(),
            entry_count: self.entries.len(),
        }
    }
}

/// The immutable result of one successful extraction run.
///
/// Day indices follow boundary order in the source and may have gaps where
/// empty days were discarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
    days: BTreeMap<u32, DaySegment>,
    source: String,
    extracted_at: DateTime<Utc>,
}

impl Curriculum {
    pub fn new(days: BTreeMap<u32, DaySegment>, source: impl Into<String>) -> Self {
        Self {
            days,
            source: source.into(),
            extracted_at: Utc::now(),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = &DaySegment> {
        self.days.values()
    }

    pub fn day(&self, day_index: u32) -> Option<&DaySegment> {
        self.days.get(&day_index)
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn entry_count(&self) -> usize {
        self.days.values().map(|d| d.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn extracted_at(&self) -> DateTime<Utc> {
        self.extracted_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub day_index: u32,
    pub title: String,
    pub entry_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumStatistics {
    pub total_days: usize,
    pub total_entries: usize,
    pub average_entries_per_day: f64,
}

impl CurriculumStatistics {
    pub fn from_curriculum(curriculum: &Curriculum) -> Self {
        let total_days = curriculum.day_count();
        let total_entries = curriculum.entry_count();
        let average_entries_per_day = if total_days == 0 {
            0.0
        } else {
            (total_entries as f64 / total_days as f64 * 10.0).round() / 10.0
        };

        Self {
            total_days,
            total_entries,
            average_entries_per_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(term: &str) -> VocabularyEntry {
        VocabularyEntry::new(term, "", "x").unwrap()
    }

    #[test]
    fn test_entry_rejects_empty_fields() {
        assert_eq!(
            VocabularyEntry::new("  ", "mizu", "Water"),
            Err(EntryRejected::EmptyTerm)
        );
        assert_eq!(
            VocabularyEntry::new("水", "mizu", " "),
            Err(EntryRejected::EmptyTranslation)
        );
    }

    #[test]
    fn test_entry_rejects_latin_term() {
        assert_eq!(
            VocabularyEntry::new("mizu", "", "Water"),
            Err(EntryRejected::TermOutsideScript('m'))
        );
    }

    #[test]
    fn test_entry_sanitizes_reading() {
        let e = VocabularyEntry::new("東京", "tōkyō (capital)!", "Tokyo").unwrap();
        assert_eq!(e.reading(), "tōkyō capital");
        assert_eq!(e.example_sentence(), "");
    }

    #[test]
    fn test_sanitize_keeps_kana_and_hyphen() {
        assert_eq!(sanitize_reading(" お-ちゃ、 "), "お-ちゃ");
        assert_eq!(sanitize_reading("ŌSAKA"), "ŌSAKA");
        assert_eq!(sanitize_reading("123"), "");
    }

    #[test]
    fn test_empty_segment_is_not_constructed() {
        assert!(DaySegment::new(1, "Empty".to_string(), vec![]).is_none());
        let day = DaySegment::new(3, "Food".to_string(), vec![entry("水")]).unwrap();
        assert_eq!(day.summary().entry_count, 1);
        assert_eq!(day.summary().day_index, 3);
    }

    #[test]
    fn test_statistics_rounding() {
        let mut days = BTreeMap::new();
        for (i, n) in [(1, 1), (2, 1), (3, 2)] {
            let entries = (0..n).map(|_| entry("水")).collect();
            days.insert(i, DaySegment::new(i, format!("Day {}", i), entries).unwrap());
        }
        let stats = CurriculumStatistics::from_curriculum(&Curriculum::new(days, "test"));
        assert_eq!(stats.total_days, 3);
        assert_eq!(stats.total_entries, 4);
        assert_eq!(stats.average_entries_per_day, 1.3);
    }

    #[test]
    fn test_statistics_empty_curriculum() {
        let stats = CurriculumStatistics::from_curriculum(&Curriculum::new(BTreeMap::new(), "test"));
        assert_eq!(stats.total_days, 0);
        assert_eq!(stats.average_entries_per_day, 0.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let e = VocabularyEntry::new("水", "みず", "Water").unwrap();
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "term": "水",
                "reading": "みず",
                "translation": "Water",
                "exampleSentence": ""
            })
        );
    }
}
