use std::collections::BTreeMap;
use super::pitch::{self, PitchClass};

/// The notes currently held, with a hold count per note so
/// that several sources can hold the same note independently.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ActiveNotes {
    counts: BTreeMap<isize, usize>,
}

impl ActiveNotes {
    pub fn new() -> ActiveNotes {
        ActiveNotes {
            counts: BTreeMap::new(),
        }
    }

    pub fn note_on(&mut self, note: isize) {
        *self.counts.entry(note).or_insert(0) += 1;
    }

    /// Releasing a note that isn't held does nothing.
    pub fn note_off(&mut self, note: isize) {
        if let Some(count) = self.counts.get_mut(&note) {
            if *count <= 1 {
                self.counts.remove(&note);
            } else {
                *count -= 1;
            }
        }
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn count(&self, note: isize) -> usize {
        self.counts.get(&note).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Held notes, lowest first.
    pub fn notes(&self) -> Vec<isize> {
        self.counts.keys().copied().collect()
    }

    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        pitch::pitch_classes(&self.notes())
    }
}
