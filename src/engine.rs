use crate::core::{chord_candidates, default_spelling, ActiveNotes, ChordCandidate, Note, SpelledNote, SpellingContext};

pub const DEFAULT_ALTERNATIVES: usize = 6;

/// Everything derived from one snapshot of the held notes.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub notes: Vec<isize>,
    pub candidates: Vec<ChordCandidate>,
    pub spelling: Option<SpellingContext>,
}

impl Analysis {
    pub fn primary(&self) -> Option<&ChordCandidate> {
        self.candidates.first()
    }

    pub fn alternatives(&self, limit: usize) -> &[ChordCandidate] {
        let end = self.candidates.len().min(limit + 1);
        if end <= 1 {
            &[]
        } else {
            &self.candidates[1..end]
        }
    }

    pub fn chord_name(&self) -> &str {
        match self.primary() {
            Some(candidate) => candidate.full_name(),
            None if self.notes.is_empty() => "(none)",
            None => "(unrecognized)",
        }
    }

    pub fn badge(&self) -> &str {
        match self.primary() {
            Some(candidate) => candidate.inversion_label(),
            None if self.notes.is_empty() => "No chord",
            None => "No match",
        }
    }

    pub fn spelled_notes(&self) -> Vec<SpelledNote> {
        match &self.spelling {
            Some(ctx) => ctx.spell_all(&self.notes),
            None => self.notes.iter().map(|n| default_spelling(Note::from(*n))).collect(),
        }
    }
}

/// Owns the held notes and the spelling of the latest analysis.
#[derive(Debug, Default)]
pub struct Engine {
    notes: ActiveNotes,
    spelling: Option<SpellingContext>,
}

impl Engine {
    pub fn new() -> Engine {
        Engine::default()
    }

    pub fn note_on(&mut self, note: isize) -> Analysis {
        self.notes.note_on(note);
        self.analyze()
    }

    pub fn note_off(&mut self, note: isize) -> Analysis {
        self.notes.note_off(note);
        self.analyze()
    }

    pub fn release_all(&mut self) -> Analysis {
        self.notes.clear();
        self.analyze()
    }

    pub fn notes(&self) -> &ActiveNotes {
        &self.notes
    }

    pub fn spelling(&self) -> Option<&SpellingContext> {
        self.spelling.as_ref()
    }

    pub fn analyze(&mut self) -> Analysis {
        let notes = self.notes.notes();
        let candidates = chord_candidates(&notes);
        let spelling = SpellingContext::build(&notes, candidates.first());
        self.spelling = spelling;

        match candidates.first() {
            Some(primary) => log::debug!("{:?} -> {} [{}] ({})",
                notes, primary, primary.inversion_label(), primary.score()),
            None => log::debug!("{:?} -> no candidates", notes),
        }
        Analysis {
            notes,
            candidates,
            spelling,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty() {
        let mut engine = Engine::new();
        let analysis = engine.analyze();
        assert!(analysis.primary().is_none());
        assert_eq!(analysis.chord_name(), "(none)");
        assert_eq!(analysis.badge(), "No chord");
        assert!(analysis.alternatives(DEFAULT_ALTERNATIVES).is_empty());
        assert!(engine.spelling().is_none());
    }

    #[test]
    fn test_build_up_chord() {
        let mut engine = Engine::new();
        engine.note_on(60);
        engine.note_on(64);
        let analysis = engine.note_on(67);
        assert_eq!(analysis.notes, vec![60, 64, 67]);
        assert_eq!(analysis.chord_name(), "C");
        assert_eq!(analysis.badge(), "root position");
        assert_eq!(engine.spelling().map(|s| s.root), Some(0));

        let spelled: Vec<String> = analysis.spelled_notes().iter().map(|n| n.to_string()).collect();
        assert_eq!(spelled, vec!["C4", "E4", "G4"]);
    }

    #[test]
    fn test_two_sources_hold_one_note() {
        let mut engine = Engine::new();
        engine.note_on(60);
        engine.note_on(64);
        // Same E from the computer keyboard
        engine.note_on(64);

        let analysis = engine.note_off(64);
        assert_eq!(analysis.notes, vec![60, 64]);
        let analysis = engine.note_off(64);
        assert_eq!(analysis.notes, vec![60]);
        assert_eq!(analysis.badge(), "single note");
    }

    #[test]
    fn test_release_unheld_note() {
        let mut engine = Engine::new();
        engine.note_on(60);
        let analysis = engine.note_off(62);
        assert_eq!(analysis.notes, vec![60]);
    }

    #[test]
    fn test_release_all_clears_spelling() {
        let mut engine = Engine::new();
        engine.note_on(60);
        engine.note_on(63);
        engine.note_on(66);
        assert!(engine.spelling().is_some());

        let analysis = engine.release_all();
        assert!(analysis.notes.is_empty());
        assert!(engine.notes().is_empty());
        assert!(engine.spelling().is_none());
    }

    #[test]
    fn test_alternatives() {
        let mut engine = Engine::new();
        for note in [53, 57, 60, 62] {
            engine.note_on(note);
        }
        let analysis = engine.analyze();
        assert_eq!(analysis.chord_name(), "F6");

        let alts = analysis.alternatives(2);
        assert_eq!(alts.len(), 2);
        assert_eq!(alts[0], analysis.candidates[1]);
        assert!(analysis.alternatives(100).len() < analysis.candidates.len());
        assert!(analysis.alternatives(0).is_empty());
    }

    #[test]
    fn test_unrecognized() {
        let analysis = Analysis {
            notes: vec![60, 61],
            candidates: vec![],
            spelling: None,
        };
        assert_eq!(analysis.chord_name(), "(unrecognized)");
        assert_eq!(analysis.badge(), "No match");
        let spelled: Vec<String> = analysis.spelled_notes().iter().map(|n| n.to_string()).collect();
        assert_eq!(spelled, vec!["C4", "D♭4"]);
    }
}
