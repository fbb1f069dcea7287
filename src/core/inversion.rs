use super::family::ChordFamily;
use super::interval::IntervalSet;
use super::pitch::{self, PitchClass};

const INVERSION_NAMES: [&str; 4] = ["1st inversion", "2nd inversion", "3rd inversion", "4th inversion"];

pub const ROOT_POSITION: &str = "root position";

pub fn slash_bass_label(bass: PitchClass) -> String {
    format!("slash bass ({})", pitch::label(bass))
}

/// Name the bass note's role in the chord: root position,
/// the nth inversion, or a slash bass outside the chord.
pub fn inversion_label(root: PitchClass, bass: PitchClass, core: &IntervalSet, family: ChordFamily) -> String {
    if bass == root {
        return ROOT_POSITION.to_string();
    }

    // Chord tones in stacking order: third, fifth, then sixth/seventh
    let mut tones: Vec<u8> = family.third().into_iter().collect();
    for interval in [6, 7, 8] {
        if core.has(interval) && !tones.contains(&interval) {
            tones.push(interval);
        }
    }
    for interval in [9, 10, 11] {
        if core.has(interval) {
            tones.push(interval);
        }
    }

    let bass_interval = pitch::interval_class(root, bass);
    match tones.iter().position(|t| *t == bass_interval) {
        Some(idx) => INVERSION_NAMES.get(idx)
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("{}th inversion", idx + 1)),
        None => slash_bass_label(bass),
    }
}
