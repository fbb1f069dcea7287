use regex::Regex;
use lazy_static::lazy_static;
use std::fmt;
use super::candidate::ChordCandidate;
use super::family::{self, ChordFamily};
use super::note::Note;
use super::pitch::{self, PitchClass, LETTERS, NATURALS};
use super::voicing::Voicing;

lazy_static! {
    static ref ROOT_RE: Regex = Regex::new(r"^([A-G](?:♭|♯)?)").unwrap();
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    fn from_offset(offset: isize) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    pub fn offset(&self) -> isize {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// The staff glyph; naturals aren't marked.
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "𝄫",
            Accidental::Flat => "♭",
            Accidental::Natural => "",
            Accidental::Sharp => "♯",
            Accidental::DoubleSharp => "𝄪",
        }
    }
}

/// A note placed on the staff: letter, accidental and octave.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SpelledNote {
    pub letter: char,
    pub accidental: Accidental,
    pub octave: isize,

    /// Staff position in letter steps, middle C (C4) = 0.
    pub step: isize,
}

impl SpelledNote {
    fn new(note: Note, letter_idx: usize, accidental: Accidental) -> SpelledNote {
        // The octave belongs to the natural letter, so B♯3 sits on a B3 step
        let natural = note.semitones as i128 - accidental.offset() as i128;
        let octave = (natural.div_euclid(12) - 1) as isize;
        SpelledNote {
            letter: LETTERS[letter_idx],
            accidental,
            octave,
            step: (octave - 4) * 7 + letter_idx as isize,
        }
    }
}

impl fmt::Display for SpelledNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter, self.accidental.symbol(), self.octave)
    }
}

/// Spelling with the fixed label table, used when there's no chord context.
pub fn default_spelling(note: Note) -> SpelledNote {
    let label = pitch::label(note.pitch_class());
    let mut chars = label.chars();
    let letter_idx = chars.next()
        .and_then(pitch::letter_index)
        .unwrap_or(0);
    let accidental = match chars.next() {
        Some('♭') => Accidental::Flat,
        Some('♯') => Accidental::Sharp,
        _ => Accidental::Natural,
    };
    SpelledNote::new(note, letter_idx, accidental)
}

/// The letter/accidental frame for notating the held notes
/// consistently with the chosen chord.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SpellingContext {
    pub root: PitchClass,
    pub root_letter: char,
    pub has_major_third: bool,
    pub prefer_sharp_eleven: bool,
    pub prefer_sharp_five: bool,
    pub prefer_double_flat_seven: bool,
}

/// Pull the root out of a chord name like "B♭m7/C".
fn parse_root(name: &str) -> Option<(PitchClass, char)> {
    let caps = ROOT_RE.captures(name)?;
    let root = caps.get(1)?.as_str();
    let pc = pitch::parse_label(root)?;
    let letter = root.chars().next()?;
    Some((pc, letter))
}

impl SpellingContext {
    /// Derive the context from the primary candidate, or from the
    /// lowest note when there isn't one.
    pub fn build(notes: &[isize], primary: Option<&ChordCandidate>) -> Option<SpellingContext> {
        let voicing = Voicing::new(notes);
        let bass = voicing.bass()?;

        let (root, root_letter) = match primary {
            Some(candidate) => match candidate.root() {
                Some(root) => parse_root(pitch::label(root))?,
                None => parse_root(candidate.full_name())?,
            },
            None => parse_root(pitch::label(pitch::normalize(bass)))?,
        };

        let intervals = voicing.intervals_from(root);
        let family = family::choose_family(&intervals);
        let has_major_third = intervals.has(4);
        Some(SpellingContext {
            root,
            root_letter,
            has_major_third,
            prefer_sharp_eleven: intervals.has(7) && family != Some(ChordFamily::Diminished),
            prefer_sharp_five: family == Some(ChordFamily::Augmented)
                || (has_major_third && intervals.has(8) && !intervals.has(7)),
            prefer_double_flat_seven: family == Some(ChordFamily::Diminished)
                && intervals.has(9) && !intervals.has(10),
        })
    }

    /// Letter steps above the root letter for each degree.
    fn letter_steps(&self, degree: u8) -> usize {
        match degree {
            0 => 0,
            1 | 2 => 1,
            3 => if self.has_major_third { 1 } else { 2 },
            4 => 2,
            5 => 3,
            6 => if self.prefer_sharp_eleven { 3 } else { 4 },
            7 => 4,
            8 => if self.prefer_sharp_five { 4 } else { 5 },
            9 => if self.prefer_double_flat_seven { 6 } else { 5 },
            _ => 6,
        }
    }

    pub fn spell(&self, note: Note) -> SpelledNote {
        let root_idx = match pitch::letter_index(self.root_letter) {
            Some(idx) => idx,
            None => return default_spelling(note),
        };
        let degree = pitch::interval_class(self.root, note.pitch_class());
        let letter_idx = (root_idx + self.letter_steps(degree)) % 7;

        // Signed distance from the natural letter, in -6..=5
        let offset = (note.pitch_class() as isize - NATURALS[letter_idx] + 6).rem_euclid(12) - 6;
        match Accidental::from_offset(offset) {
            Some(accidental) => SpelledNote::new(note, letter_idx, accidental),
            None => default_spelling(note),
        }
    }

    pub fn spell_all(&self, notes: &[isize]) -> Vec<SpelledNote> {
        notes.iter().map(|n| self.spell(Note::from(*n))).collect()
    }
}
