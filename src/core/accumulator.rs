use crate::domain::model::{DaySegment, VocabularyEntry};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: usize,
    pub boundaries: usize,
    pub entries: usize,
    pub unparseable: usize,
    pub orphaned: usize,
    pub empty_days: usize,
}

#[derive(Debug)]
struct OpenSegment {
    day_index: u32,
    title: String,
    entries: Vec<VocabularyEntry>,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    NoOpenSegment,
    SegmentOpen(OpenSegment),
}

/// Groups resolved entries under the most recent day boundary.
///
/// Day indices come from an internal counter bumped on every boundary, so a
/// discarded empty day leaves a gap in the key space.
#[derive(Debug, Default)]
pub struct SegmentAccumulator {
    state: State,
    day_counter: u32,
    days: BTreeMap<u32, DaySegment>,
    empty_days: usize,
}

impl SegmentAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::SegmentOpen(_))
    }

    /// Closes the current day (if any) and opens a new one.
    pub fn open_day(&mut self, title: &str) -> u32 {
        self.finalize_current();
        self.day_counter += 1;
        self.state = State::SegmentOpen(OpenSegment {
            day_index: self.day_counter,
            title: title.to_string(),
            entries: Vec::new(),
        });
        self.day_counter
    }

    /// Appends to the open day. Returns `false` when no day is open.
    pub fn push_entry(&mut self, entry: VocabularyEntry) -> bool {
        match &mut self.state {
            State::SegmentOpen(open) => {
                open.entries.push(entry);
                true
            }
            State::NoOpenSegment => false,
        }
    }

    pub fn finish(mut self) -> (BTreeMap<u32, DaySegment>, usize) {
        self.finalize_current();
        (self.days, self.empty_days)
    }

    fn finalize_current(&mut self) {
        if let State::SegmentOpen(open) = std::mem::take(&mut self.state) {
            match DaySegment::new(open.day_index, open.title, open.entries) {
                Some(segment) => {
                    self.days.insert(open.day_index, segment);
                }
                None => {
                    tracing::debug!("Discarding empty day {}", open.day_index);
                    self.empty_days += 1;
                }
            }
        }
    }
}
