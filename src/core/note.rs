use regex::Regex;
use thiserror::Error;
use lazy_static::lazy_static;
use std::{fmt, str::FromStr};
use super::pitch::{self, PitchClass};

lazy_static! {
    static ref NOTE_RE: Regex = Regex::new(r"^([A-G](?:b|#|♭|♯)*)(-?\d+)$").unwrap();
}

/// A note number in MIDI convention, i.e. 60 = "C4".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Note {
    pub semitones: isize,
}

impl Note {
    pub fn pitch_class(&self) -> PitchClass {
        pitch::normalize(self.semitones)
    }

    pub fn octave(&self) -> isize {
        self.semitones.div_euclid(12) - 1
    }
}

#[derive(Error, Debug)]
pub enum NoteParseError {
    #[error("Invalid note name `{0}`")]
    InvalidName(String),

    #[error("Couldn't parse octave")]
    ParseIntError(#[from] std::num::ParseIntError),

    #[error("Note `{0}` is out of range")]
    OutOfRange(String),
}

/// Try to parse a note from a string, e.g. "C4", "Eb3", "F♯5",
/// or a bare note number, e.g. "60".
impl FromStr for Note {
    type Err = NoteParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(semitones) = s.parse::<isize>() {
            return Ok(Note { semitones });
        }
        let caps = NOTE_RE.captures(s).ok_or(NoteParseError::InvalidName(s.to_string()))?;
        let name = caps.get(1)
            .ok_or(NoteParseError::InvalidName(s.to_string()))?
            .as_str();
        let octave = caps.get(2)
            .ok_or(NoteParseError::InvalidName(s.to_string()))?
            .as_str().parse::<isize>()?;
        let offset = pitch::letter_offset(name)
            .ok_or(NoteParseError::InvalidName(name.to_string()))?;
        let semitones = octave.checked_add(1)
            .and_then(|o| o.checked_mul(12))
            .and_then(|n| n.checked_add(offset))
            .ok_or(NoteParseError::OutOfRange(s.to_string()))?;
        Ok(Note { semitones })
    }
}

impl TryFrom<&str> for Note {
    type Error = NoteParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(Self::from_str(s)?)
    }
}

impl TryFrom<String> for Note {
    type Error = NoteParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Ok(Self::from_str(&s)?)
    }
}

impl From<isize> for Note {
    fn from(semitones: isize) -> Self {
        Note { semitones }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", pitch::label(self.pitch_class()), self.octave())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_note_names() {
        let note = Note { semitones: 60 };
        assert_eq!(note.to_string(), "C4".to_string());

        let note = Note { semitones: 61 };
        assert_eq!(note.to_string(), "D♭4".to_string());

        let note = Note { semitones: 59 };
        assert_eq!(note.to_string(), "B3".to_string());

        let note = Note { semitones: 21 };
        assert_eq!(note.to_string(), "A0".to_string());

        let note = Note { semitones: 0 };
        assert_eq!(note.to_string(), "C-1".to_string());
    }

    #[test]
    fn test_parse_note() {
        let note: Note = "C4".try_into().unwrap();
        assert_eq!(note.semitones, 60);

        let note: Note = "Eb3".try_into().unwrap();
        assert_eq!(note.semitones, 51);

        let note: Note = "F♯5".try_into().unwrap();
        assert_eq!(note.semitones, 78);

        let note: Note = "B#3".try_into().unwrap();
        assert_eq!(note.semitones, 60);

        let note: Note = "Cb4".try_into().unwrap();
        assert_eq!(note.semitones, 59);

        let note: Note = "C-1".try_into().unwrap();
        assert_eq!(note.semitones, 0);

        let note: Note = "64".try_into().unwrap();
        assert_eq!(note.semitones, 64);
    }

    #[test]
    fn test_parse_invalid_note() {
        assert!(Note::from_str("H4").is_err());
        assert!(Note::from_str("C").is_err());
        assert!(Note::from_str("").is_err());
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(Note::from_str("C999999999999999999"), Err(NoteParseError::OutOfRange(_))));
        assert!(matches!(Note::from_str("C-999999999999999999"), Err(NoteParseError::OutOfRange(_))));

        // Octaves past isize are a parse error, big note numbers are fine
        assert!(matches!(Note::from_str("C99999999999999999999"), Err(NoteParseError::ParseIntError(_))));
        let note: Note = "9223372036854775807".try_into().unwrap();
        assert_eq!(note.semitones, isize::MAX);
    }
}
