use std::collections::HashSet;
use super::candidate::{self, ChordCandidate};
use super::upper;
use super::voicing::Voicing;

/// A bass-rooted reading at or above this score is convincing
/// enough that slash readings aren't considered.
pub const STRONG_BASS_SCORE: i32 = 92;

/// All readings of the held notes, best first, one per name.
pub fn chord_candidates(notes: &[isize]) -> Vec<ChordCandidate> {
    let voicing = Voicing::new(notes);
    let pitch_classes = voicing.pitch_classes();
    let bass = match voicing.bass_pitch_class() {
        Some(bass) => bass,
        None => return vec![],
    };
    if pitch_classes.len() == 1 {
        return vec![ChordCandidate::single_note(bass)];
    }

    let mut candidates: Vec<ChordCandidate> = pitch_classes.iter()
        .flat_map(|root| candidate::root_candidates(*root, &voicing))
        .collect();

    let strong_bass_root = candidates.iter()
        .any(|c| c.root() == Some(bass) && c.score() >= STRONG_BASS_SCORE);
    if !strong_bass_root {
        candidates.extend(upper::slash_candidates(pitch_classes, bass));
    }

    rank(candidates)
}

/// Sort by score, highest first, keeping the original order among ties,
/// then drop later candidates that repeat an earlier name.
pub fn rank(mut candidates: Vec<ChordCandidate>) -> Vec<ChordCandidate> {
    candidates.sort_by(|a, b| b.score().cmp(&a.score()));
    let mut seen = HashSet::new();
    candidates.retain(|c| seen.insert(c.full_name().to_string()));
    candidates
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::candidate::Source;

    fn primary(notes: &[isize]) -> ChordCandidate {
        chord_candidates(notes).into_iter().next().unwrap()
    }

    #[test]
    fn test_no_notes() {
        assert!(chord_candidates(&[]).is_empty());
    }

    #[test]
    fn test_single_note() {
        let candidates = chord_candidates(&[64]);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].full_name(), "E");
        assert_eq!(candidates[0].inversion_label(), "single note");
        assert_eq!(candidates[0].score(), 1);
        assert_eq!(candidates[0].source(), Source::SingleNote);

        // Octaves of one pitch class are still a single note
        let candidates = chord_candidates(&[52, 64, 76]);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].full_name(), "E");
    }

    #[test]
    fn test_major_triad() {
        let chord = primary(&[60, 64, 67]);
        assert_eq!(chord.full_name(), "C");
        assert_eq!(chord.inversion_label(), "root position");
    }

    #[test]
    fn test_order_independent() {
        assert_eq!(chord_candidates(&[64, 67, 60]), chord_candidates(&[60, 64, 67]));
        assert_eq!(primary(&[67, 60, 64]).full_name(), "C");
    }

    #[test]
    fn test_first_inversion() {
        let chord = primary(&[64, 67, 72]);
        assert_eq!(chord.full_name(), "C/E");
        assert_eq!(chord.inversion_label(), "1st inversion");
    }

    #[test]
    fn test_dominant_seventh() {
        let chord = primary(&[60, 64, 67, 70]);
        assert_eq!(chord.full_name(), "C7");
        assert_eq!(chord.inversion_label(), "root position");
    }

    #[test]
    fn test_diminished_seventh() {
        let chord = primary(&[60, 63, 66, 69]);
        assert_eq!(chord.full_name(), "C°7");
    }

    #[test]
    fn test_seventh_inversion() {
        // C E G B♭ with E in the bass
        let chord = primary(&[52, 55, 58, 60]);
        assert_eq!(chord.full_name(), "C7/E");
        assert_eq!(chord.inversion_label(), "1st inversion");
    }

    #[test]
    fn test_sixth_chord_over_minor_seventh() {
        // F A C D reads as F6 in root position rather than Dm7/F
        let candidates = chord_candidates(&[53, 57, 60, 62]);
        assert_eq!(candidates[0].full_name(), "F6");
        let alt = candidates.iter().find(|c| c.full_name() == "Dm7/F").unwrap();
        assert_eq!(alt.inversion_label(), "1st inversion");
    }

    #[test]
    fn test_upper_structure_wins() {
        // B♭ major triad over C
        let candidates = chord_candidates(&[48, 58, 62, 65]);
        assert_eq!(candidates[0].full_name(), "B♭/C");
        assert_eq!(candidates[0].inversion_label(), "slash bass (C)");
        assert_eq!(candidates[0].source(), Source::UpperStructure);
        assert!(candidates.iter().any(|c| c.full_name() == "C9sus"));
    }

    #[test]
    fn test_weak_bass_adds_upper_structure() {
        // D F♯ A over C: nothing rooted on C scores well
        let candidates = chord_candidates(&[48, 62, 66, 69]);
        assert_eq!(candidates[0].full_name(), "D7/C");
        assert_eq!(candidates[0].inversion_label(), "3rd inversion");
        assert!(candidates.iter().any(|c| c.full_name() == "D/C" && c.source() == Source::UpperStructure));
    }

    #[test]
    fn test_strong_bass_skips_upper_structure() {
        let candidates = chord_candidates(&[60, 64, 67, 70]);
        assert!(candidates[0].score() >= STRONG_BASS_SCORE);
        assert!(candidates.iter().all(|c| c.source() != Source::UpperStructure));
    }

    #[test]
    fn test_unpromotable_seventh_drops_tensions() {
        // B D F A♭ with a C♯ ninth above the octave
        let chord = primary(&[47, 61, 62, 65, 68]);
        assert_eq!(chord.full_name(), "B°7");
        assert_eq!(chord.inversion_label(), "root position");
        assert_eq!(chord.score(), 153);
    }

    #[test]
    fn test_extreme_note_numbers() {
        // Far outside MIDI range, still E, E and G
        let candidates = chord_candidates(&[isize::MIN, 4, isize::MAX]);
        assert!(!candidates.is_empty());
        assert_eq!(candidates, chord_candidates(&[isize::MAX, isize::MIN, 4]));
    }

    #[test]
    fn test_sorted_and_unique() {
        let examples: Vec<Vec<isize>> = vec![
            vec![60, 64, 67],
            vec![48, 55, 62],
            vec![60, 62, 64, 65, 67, 69, 71],
            vec![60, 61, 62],
            vec![48, 58, 62, 65],
        ];
        for notes in examples {
            let candidates = chord_candidates(&notes);
            assert!(!candidates.is_empty());
            for pair in candidates.windows(2) {
                assert!(pair[0].score() >= pair[1].score());
            }
            let names: HashSet<&str> = candidates.iter().map(|c| c.full_name()).collect();
            assert_eq!(names.len(), candidates.len());

            // Idempotent
            assert_eq!(chord_candidates(&notes), candidates);
        }
    }

    #[test]
    fn test_rank_is_stable() {
        let candidates = vec![
            ChordCandidate::new("A".to_string(), "".to_string(), 10, Source::RootAnalysis, None),
            ChordCandidate::new("B".to_string(), "".to_string(), 20, Source::RootAnalysis, None),
            ChordCandidate::new("C".to_string(), "".to_string(), 10, Source::RootAnalysis, None),
            ChordCandidate::new("B".to_string(), "".to_string(), 5, Source::UpperStructure, None),
        ];
        let ranked = rank(candidates);
        let names: Vec<&str> = ranked.iter().map(|c| c.full_name()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(ranked[0].source(), Source::RootAnalysis);
    }
}
