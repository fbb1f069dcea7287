use super::candidate::{ChordCandidate, Source};
use super::interval::IntervalSet;
use super::inversion::slash_bass_label;
use super::pitch::{self, PitchClass};

const UPPER_STRUCTURE_SCORE: i32 = 108;

/// Triad shapes recognized above a foreign bass, checked in order.
const TRIADS: [([u8; 3], &str); 6] = [
    ([0, 4, 7], ""),
    ([0, 3, 7], "m"),
    ([0, 3, 6], "°"),
    ([0, 4, 8], "+"),
    ([0, 5, 7], "sus"),
    ([0, 2, 7], "sus2"),
];

fn simple_triad(intervals: &IntervalSet) -> Option<&'static str> {
    TRIADS.iter()
        .find(|(shape, _)| shape.iter().all(|i| intervals.has(*i)))
        .map(|(_, symbol)| *symbol)
}

/// Look for a clean triad in the three pitch classes above the bass,
/// read as a slash chord over that bass.
pub fn slash_candidates(pitch_classes: &[PitchClass], bass: PitchClass) -> Vec<ChordCandidate> {
    let upper: Vec<PitchClass> = pitch_classes.iter()
        .copied()
        .filter(|pc| *pc != bass)
        .collect();
    // Strict, so these never crowd out clearer root readings
    if upper.len() != 3 {
        return vec![];
    }

    let mut candidates = vec![];
    for root in &upper {
        let intervals = IntervalSet::from_root(*root, &upper);
        let symbol = match simple_triad(&intervals) {
            Some(symbol) => symbol,
            None => continue,
        };

        let bass_interval = pitch::interval_class(*root, bass);
        if intervals.has(bass_interval) {
            continue;
        }

        let mut score = UPPER_STRUCTURE_SCORE;
        if bass_interval == 2 || bass_interval == 5 {
            score += 10;
        }
        if symbol.is_empty() || symbol == "m" {
            score += 5;
        }

        candidates.push(ChordCandidate::new(
            format!("{}{}/{}", pitch::label(*root), symbol, pitch::label(bass)),
            slash_bass_label(bass),
            score,
            Source::UpperStructure,
            None));
    }
    candidates
}
