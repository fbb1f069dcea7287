use super::interval::IntervalSet;
use super::pitch::{self, PitchClass};

/// A snapshot of held notes, sorted low to high.
/// The lowest note is the bass.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Voicing {
    notes: Vec<isize>,
    pitch_classes: Vec<PitchClass>,
}

impl Voicing {
    pub fn new(notes: &[isize]) -> Voicing {
        let mut notes = notes.to_vec();
        notes.sort_unstable();
        notes.dedup();
        let pitch_classes = pitch::pitch_classes(&notes);
        Voicing {
            notes,
            pitch_classes,
        }
    }

    pub fn notes(&self) -> &[isize] {
        &self.notes
    }

    pub fn pitch_classes(&self) -> &[PitchClass] {
        &self.pitch_classes
    }

    pub fn bass(&self) -> Option<isize> {
        self.notes.first().copied()
    }

    pub fn bass_pitch_class(&self) -> Option<PitchClass> {
        self.bass().map(pitch::normalize)
    }

    pub fn intervals_from(&self, root: PitchClass) -> IntervalSet {
        IntervalSet::from_root(root, &self.pitch_classes)
    }

    /// The note that stands for `root` when measuring register:
    /// the lowest instance of the root, or if the root isn't held,
    /// the bass moved down to the nearest root below it.
    /// Widened so any held note range measures without overflow.
    pub fn root_reference(&self, root: PitchClass) -> Option<i128> {
        self.notes.iter()
            .find(|n| pitch::normalize(**n) == root)
            .map(|n| *n as i128)
            .or_else(|| {
                self.bass().map(|bass| {
                    bass as i128 - pitch::interval_class(root, pitch::normalize(bass)) as i128
                })
            })
    }

    /// Whether the tone `interval` above `root` is voiced
    /// an octave or more above the root reference.
    pub fn has_upper_extension(&self, root: PitchClass, interval: u8) -> bool {
        let target = (root + interval) % 12;
        match self.root_reference(root) {
            Some(reference) => self.notes.iter()
                .any(|n| pitch::normalize(*n) == target && *n as i128 - reference >= 12),
            None => false,
        }
    }
}
