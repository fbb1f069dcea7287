use std::fmt;
use super::pitch::{interval_class, PitchClass};

const NAMES: [&str; 12] = [
    "P1",
    "m2",
    "M2",
    "m3",
    "M3",
    "P4",
    "d5",
    "P5",
    "m6",
    "M6",
    "m7",
    "M7",
];

/// A set of interval classes (0-11) above a root.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct IntervalSet {
    bits: u16,
}

impl IntervalSet {
    pub fn new() -> IntervalSet {
        IntervalSet { bits: 0 }
    }

    /// The intervals from `root` to each of the given pitch classes.
    pub fn from_root(root: PitchClass, pitch_classes: &[PitchClass]) -> IntervalSet {
        pitch_classes.iter()
            .map(|pc| interval_class(root, *pc))
            .collect()
    }

    pub fn has(&self, interval: u8) -> bool {
        interval < 12 && self.bits & (1 << interval) != 0
    }

    pub fn insert(&mut self, interval: u8) {
        self.bits |= 1 << (interval % 12);
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Intervals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..12).filter(move |i| self.has(*i))
    }
}

impl FromIterator<u8> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = IntervalSet::new();
        for interval in iter {
            set.insert(interval);
        }
        set
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|i| NAMES[i as usize]).collect();
        write!(f, "{}", names.join(" "))
    }
}
