use crate::core::accumulator::{ScanStats, SegmentAccumulator};
use crate::core::classifier::{LineClassifier, LineKind, RawLine};
use crate::core::resolver::{EntryResolver, Unparseable};
use crate::domain::model::DaySegment;
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// Single forward pass over the document text.
#[derive(Debug, Clone, Default)]
pub struct CurriculumExtractor {
    classifier: LineClassifier,
    resolver: EntryResolver,
}

impl CurriculumExtractor {
    pub fn new(day_keyword: &str) -> Result<Self> {
        Ok(Self {
            classifier: LineClassifier::new(day_keyword)?,
            resolver: EntryResolver::new(),
        })
    }

    pub fn extract(&self, text: &str) -> BTreeMap<u32, DaySegment> {
        self.extract_with_stats(text).0
    }

    pub fn extract_with_stats(&self, text: &str) -> (BTreeMap<u32, DaySegment>, ScanStats) {
        let mut accumulator = SegmentAccumulator::new();
        let mut stats = ScanStats::default();

        let lines = text
            .lines()
            .enumerate()
            .map(|(index, text)| RawLine { index, text });

        for line in lines {
            stats.lines += 1;

            match self.classifier.classify(line.text) {
                LineKind::Blank => {}
                LineKind::DayBoundary { number_hint, title } => {
                    stats.boundaries += 1;
                    let day_index = accumulator.open_day(title);
                    if number_hint.is_some_and(|n| n != day_index) {
                        tracing::debug!(
                            "Line {}: printed day {:?} differs from day index {}",
                            line.index + 1,
                            number_hint,
                            day_index
                        );
                    }
                }
                LineKind::Candidate(_) if !accumulator.is_open() => {
                    stats.orphaned += 1;
                }
                LineKind::Candidate(candidate) => match self.resolver.resolve(candidate) {
                    Ok(entry) => {
                        accumulator.push_entry(entry);
                        stats.entries += 1;
                    }
                    Err(reason) => {
                        stats.unparseable += 1;
                        match reason {
                            Unparseable::NoPattern => tracing::debug!(
                                "Line {}: no entry pattern matched: {}",
                                line.index + 1,
                                candidate
                            ),
                            Unparseable::Rejected(why) => tracing::debug!(
                                "Line {}: entry rejected ({}): {}",
                                line.index + 1,
                                why,
                                candidate
                            ),
                        }
                    }
                },
            }
        }

        let (days, empty_days) = accumulator.finish();
        stats.empty_days = empty_days;

        tracing::info!(
            "Scanned {} lines: {} days kept, {} entries, {} unparseable, {} orphaned, {} empty days dropped",
            stats.lines,
            days.len(),
            stats.entries,
            stats.unparseable,
            stats.orphaned,
            stats.empty_days
        );

        (days, stats)
    }
}
