/// Pitch classes are note numbers reduced mod 12, 0 = C.
pub type PitchClass = u8;

pub const LABELS: [&str; 12] = ["C", "D♭", "D", "E♭", "E", "F", "F♯", "G", "A♭", "A", "B♭", "B"];

pub const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Semitones above C for each natural letter in `LETTERS`.
pub const NATURALS: [isize; 7] = [0, 2, 4, 5, 7, 9, 11];

pub fn normalize(value: isize) -> PitchClass {
    value.rem_euclid(12) as PitchClass
}

pub fn label(pitch_class: PitchClass) -> &'static str {
    LABELS[(pitch_class % 12) as usize]
}

/// Distance in semitones (0-11) from `root` up to `pitch_class`.
pub fn interval_class(root: PitchClass, pitch_class: PitchClass) -> u8 {
    normalize(pitch_class as isize - root as isize)
}

/// Ascending, deduplicated pitch classes of a set of note numbers.
pub fn pitch_classes(notes: &[isize]) -> Vec<PitchClass> {
    let mut pcs: Vec<PitchClass> = notes.iter().map(|n| normalize(*n)).collect();
    pcs.sort_unstable();
    pcs.dedup();
    pcs
}

pub fn letter_index(letter: char) -> Option<usize> {
    LETTERS.iter().position(|&l| l == letter.to_ascii_uppercase())
}

/// Semitone offset from C for a spelled pitch like "E♭" or "B#".
/// Not normalized, so "C♭" is -1 and "B♯" is 12.
pub fn letter_offset(name: &str) -> Option<isize> {
    let mut chars = name.chars();
    let letter = chars.next()?;
    let mut offset = NATURALS[letter_index(letter)?];
    for c in chars {
        match c {
            'b' | '♭' => offset -= 1,
            '#' | '♯' => offset += 1,
            _ => return None,
        }
    }
    Some(offset)
}

pub fn parse_label(name: &str) -> Option<PitchClass> {
    letter_offset(name).map(normalize)
}
