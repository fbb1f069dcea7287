use super::candidate::{bass_role, ChordCandidate, Source};
use super::extension::{ExtensionContext, Extensions};
use super::family::ChordFamily;
use super::interval::IntervalSet;
use super::inversion::inversion_label;
use super::pitch::PitchClass;
use super::score::{self, ShellReading};
use super::symbol::ChordSymbol;
use super::voicing::Voicing;

/// A loose reading for voicings no chord quality matches.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Shell {
    Major,
    Minor,
    Sus4,
    Sus2,
    Power,
    Cluster,
}

impl Shell {
    pub fn choose(intervals: &IntervalSet) -> Shell {
        if intervals.has(4) {
            Shell::Major
        } else if intervals.has(3) {
            Shell::Minor
        } else if intervals.has(5) {
            Shell::Sus4
        } else if intervals.has(2) {
            Shell::Sus2
        } else if intervals.has(7) {
            Shell::Power
        } else {
            Shell::Cluster
        }
    }

    /// The chord family used to name extensions and inversions.
    pub fn family(&self) -> ChordFamily {
        match self {
            Shell::Major => ChordFamily::Major,
            Shell::Minor => ChordFamily::Minor,
            Shell::Sus4 => ChordFamily::Sus4,
            Shell::Sus2 => ChordFamily::Sus2,
            Shell::Power | Shell::Cluster => ChordFamily::Power,
        }
    }

    /// The shell's interval above the root, if it has one.
    fn interval(&self) -> Option<u8> {
        match self {
            Shell::Major => Some(4),
            Shell::Minor => Some(3),
            Shell::Sus4 => Some(5),
            Shell::Sus2 => Some(2),
            Shell::Power => Some(7),
            Shell::Cluster => None,
        }
    }

    /// The minimal core and its symbol: root, shell tone,
    /// and a seventh when one is held.
    pub fn core(&self, intervals: &IntervalSet) -> (IntervalSet, &'static str) {
        let mut core = IntervalSet::new();
        core.insert(0);
        if let Some(interval) = self.interval() {
            core.insert(interval);
        }

        let seventh = if intervals.has(10) {
            Some(10)
        } else if intervals.has(11) {
            Some(11)
        } else {
            None
        };

        let symbol = match (self, seventh) {
            (Shell::Power, _) => "5",
            (Shell::Cluster, _) => "",
            (Shell::Major, Some(10)) => "7",
            (Shell::Major, Some(_)) => "Δ7",
            (Shell::Major, None) => "",
            (Shell::Minor, Some(10)) => "m7",
            (Shell::Minor, Some(_)) => "mΔ7",
            (Shell::Minor, None) => "m",
            (Shell::Sus4, Some(10)) => "7sus",
            (Shell::Sus4, Some(_)) => "Δ7sus",
            (Shell::Sus4, None) => "sus",
            (Shell::Sus2, Some(10)) => "7sus2",
            (Shell::Sus2, Some(_)) => "Δ7sus2",
            (Shell::Sus2, None) => "sus2",
        };
        if !matches!(self, Shell::Power | Shell::Cluster) {
            if let Some(interval) = seventh {
                core.insert(interval);
            }
        }
        (core, symbol)
    }
}

/// Build the shell reading on `root`. Its score starts well below
/// root analysis so it never outranks a clean chord quality.
pub fn shell_candidate(root: PitchClass, voicing: &Voicing) -> Option<ChordCandidate> {
    let bass = voicing.bass_pitch_class()?;
    let intervals = voicing.intervals_from(root);
    if !intervals.has(0) {
        return None;
    }

    let shell = Shell::choose(&intervals);
    let family = shell.family();
    let (core, base) = shell.core(&intervals);
    let has_seventh = core.has(10) || core.has(11) || intervals.has(10) || intervals.has(11);

    let ctx = ExtensionContext {
        family,
        has_seventh,
        has_major_third: intervals.has(4),
        high9: voicing.has_upper_extension(root, 2),
        high11: voicing.has_upper_extension(root, 5),
        high13: voicing.has_upper_extension(root, 9),
    };
    let extensions = Extensions::collect(&intervals, &core, &ctx);
    let symbol = ChordSymbol::new(root, bass, base, extensions)
        .promote(base.contains('7'));

    let score = score::shell_score(&ShellReading {
        intervals: &intervals,
        bass: bass_role(root, bass, &core),
        has_seventh,
        color_count: symbol.colors().len(),
        triadic_shell: matches!(shell, Shell::Major | Shell::Minor),
    });

    Some(ChordCandidate::new(
        symbol.to_string(),
        inversion_label(root, bass, &core, family),
        score,
        Source::IntervalFallback,
        Some(root)))
}
