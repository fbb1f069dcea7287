use std::fmt;
use super::extension::{ExtensionContext, Extensions};
use super::family::{self, ChordFamily};
use super::fallback;
use super::interval::IntervalSet;
use super::inversion::inversion_label;
use super::pitch::{self, PitchClass};
use super::score::{self, BassRole, RootReading};
use super::symbol::ChordSymbol;
use super::voicing::Voicing;

/// Which analysis produced a candidate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Source {
    SingleNote,
    RootAnalysis,
    Add9Heuristic,
    Add11Heuristic,
    IntervalFallback,
    UpperStructure,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Source::SingleNote => "single-note",
            Source::RootAnalysis => "root-analysis",
            Source::Add9Heuristic => "add9-heuristic",
            Source::Add11Heuristic => "add11-heuristic",
            Source::IntervalFallback => "interval-fallback",
            Source::UpperStructure => "upper-structure",
        };
        write!(f, "{}", name)
    }
}

/// One scored reading of the held notes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ChordCandidate {
    full_name: String,
    inversion_label: String,
    score: i32,
    source: Source,
    root: Option<PitchClass>,
}

impl ChordCandidate {
    pub fn new(full_name: String, inversion_label: String, score: i32, source: Source, root: Option<PitchClass>) -> ChordCandidate {
        ChordCandidate {
            full_name,
            inversion_label,
            score,
            source,
            root,
        }
    }

    pub fn single_note(pitch_class: PitchClass) -> ChordCandidate {
        ChordCandidate::new(
            pitch::label(pitch_class).to_string(),
            "single note".to_string(),
            1,
            Source::SingleNote,
            Some(pitch_class))
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn inversion_label(&self) -> &str {
        &self.inversion_label
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn root(&self) -> Option<PitchClass> {
        self.root
    }
}

impl fmt::Display for ChordCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

pub fn bass_role(root: PitchClass, bass: PitchClass, core: &IntervalSet) -> BassRole {
    if bass == root {
        BassRole::Root
    } else if core.has(pitch::interval_class(root, bass)) {
        BassRole::ChordTone
    } else {
        BassRole::Foreign
    }
}

/// Read the voicing as a chord built on `root`.
/// Falls back to a shell reading when no chord quality fits.
pub fn root_candidates(root: PitchClass, voicing: &Voicing) -> Vec<ChordCandidate> {
    let bass = match voicing.bass_pitch_class() {
        Some(bass) => bass,
        None => return vec![],
    };
    let intervals = voicing.intervals_from(root);
    if !intervals.has(0) {
        return vec![];
    }

    let family = match family::choose_family(&intervals) {
        Some(family) => family,
        None => return fallback::shell_candidate(root, voicing).into_iter().collect(),
    };
    let seventh = family::detect_seventh(&intervals, family);
    let sixth = family::uses_added_sixth(&intervals, family, seventh);
    let core = family::core_intervals(family, seventh, sixth);
    let has_seventh = family::has_seventh_in_core(&core, family);

    let ctx = ExtensionContext {
        family,
        has_seventh,
        has_major_third: intervals.has(4),
        high9: voicing.has_upper_extension(root, 2),
        high11: voicing.has_upper_extension(root, 5),
        high13: voicing.has_upper_extension(root, 9),
    };
    let extensions = Extensions::collect(&intervals, &core, &ctx);
    let symbol = ChordSymbol::new(root, bass, family::base_symbol(family, seventh, sixth), extensions)
        .six_nine(has_seventh)
        .promote(has_seventh);

    let score = score::root_score(&RootReading {
        family,
        intervals: &intervals,
        bass: bass_role(root, bass, &core),
        has_seventh,
        added_sixth: sixth,
        color_count: symbol.colors().len(),
        high9: ctx.high9,
        high11: ctx.high11,
        symbol: symbol.base(),
    });
    let inversion = inversion_label(root, bass, &core, family);

    let mut candidates = vec![ChordCandidate::new(
        symbol.to_string(),
        inversion.clone(),
        score,
        Source::RootAnalysis,
        Some(root))];

    // An open fifth with a 9th or 11th above the octave and no third
    // is often better read as add9/add11 than as sus2/sus4
    let slash = if symbol.is_slash() {
        format!("/{}", pitch::label(bass))
    } else {
        String::new()
    };
    if family == ChordFamily::Sus2 && !has_seventh && ctx.high9 {
        candidates.push(ChordCandidate::new(
            format!("{}add9{}", pitch::label(root), slash),
            inversion.clone(),
            score + 6,
            Source::Add9Heuristic,
            Some(root)));
    }
    if family == ChordFamily::Sus4 && !has_seventh && ctx.high11 {
        candidates.push(ChordCandidate::new(
            format!("{}add11{}", pitch::label(root), slash),
            inversion,
            score + 5,
            Source::Add11Heuristic,
            Some(root)));
    }

    log::trace!("{} over {}: {} ({})", pitch::label(root), intervals, candidates[0], score);
    candidates
}
