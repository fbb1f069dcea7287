use std::fmt;
use super::interval::IntervalSet;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ChordFamily {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus4,
    Sus2,
    Power,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SeventhKind {
    None,
    Minor,
    Major,
    Diminished,
}

impl ChordFamily {
    pub fn is_major_or_minor(&self) -> bool {
        matches!(self, ChordFamily::Major | ChordFamily::Minor)
    }

    pub fn is_sus(&self) -> bool {
        matches!(self, ChordFamily::Sus4 | ChordFamily::Sus2)
    }

    /// The interval standing in for the third, if any.
    pub fn third(&self) -> Option<u8> {
        match self {
            ChordFamily::Major | ChordFamily::Augmented => Some(4),
            ChordFamily::Minor | ChordFamily::Diminished => Some(3),
            ChordFamily::Sus2 => Some(2),
            ChordFamily::Sus4 => Some(5),
            ChordFamily::Power => None,
        }
    }

    /// The interval standing in for the fifth.
    pub fn fifth(&self) -> u8 {
        match self {
            ChordFamily::Diminished => 6,
            ChordFamily::Augmented => 8,
            _ => 7,
        }
    }
}

impl fmt::Display for ChordFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChordFamily::Major => "major",
            ChordFamily::Minor => "minor",
            ChordFamily::Diminished => "dim",
            ChordFamily::Augmented => "aug",
            ChordFamily::Sus4 => "sus4",
            ChordFamily::Sus2 => "sus2",
            ChordFamily::Power => "power",
        };
        write!(f, "{}", name)
    }
}

/// Pick the chord quality for a set of intervals above a root.
/// Augmented and diminished are checked before plain major/minor
/// so that e.g. a major third with an augmented fifth reads as augmented.
pub fn choose_family(intervals: &IntervalSet) -> Option<ChordFamily> {
    let has_maj3 = intervals.has(4);
    let has_min3 = intervals.has(3);
    let has_p5 = intervals.has(7);

    if has_maj3 && intervals.has(8) {
        Some(ChordFamily::Augmented)
    } else if has_min3 && intervals.has(6) {
        Some(ChordFamily::Diminished)
    } else if has_maj3 {
        Some(ChordFamily::Major)
    } else if has_min3 {
        Some(ChordFamily::Minor)
    } else if intervals.has(5) && has_p5 {
        Some(ChordFamily::Sus4)
    } else if intervals.has(2) && has_p5 {
        Some(ChordFamily::Sus2)
    } else if has_p5 {
        Some(ChordFamily::Power)
    } else {
        None
    }
}

pub fn detect_seventh(intervals: &IntervalSet, family: ChordFamily) -> SeventhKind {
    let has_min7 = intervals.has(10);
    if family == ChordFamily::Diminished && intervals.has(9) && !has_min7 {
        SeventhKind::Diminished
    } else if has_min7 {
        SeventhKind::Minor
    } else if intervals.has(11) {
        SeventhKind::Major
    } else {
        SeventhKind::None
    }
}

/// A major sixth over a plain major/minor triad reads as a "6" chord.
pub fn uses_added_sixth(intervals: &IntervalSet, family: ChordFamily, seventh: SeventhKind) -> bool {
    family.is_major_or_minor() && seventh == SeventhKind::None && intervals.has(9)
}

/// The intervals absorbed by the chord's quality; everything
/// else is an extension.
pub fn core_intervals(family: ChordFamily, seventh: SeventhKind, sixth: bool) -> IntervalSet {
    let mut core = IntervalSet::new();
    core.insert(0);
    if let Some(third) = family.third() {
        core.insert(third);
    }
    core.insert(family.fifth());

    let seventh_interval = match (family, seventh) {
        (ChordFamily::Power, _) => None,
        (ChordFamily::Major | ChordFamily::Minor, _) if sixth => Some(9),
        (ChordFamily::Diminished, SeventhKind::Diminished) => Some(9),
        (ChordFamily::Diminished, SeventhKind::Major) => None,
        (_, SeventhKind::Minor) => Some(10),
        (_, SeventhKind::Major) => Some(11),
        (_, SeventhKind::Diminished) | (_, SeventhKind::None) => None,
    };
    if let Some(interval) = seventh_interval {
        core.insert(interval);
    }
    core
}

pub fn has_seventh_in_core(core: &IntervalSet, family: ChordFamily) -> bool {
    (family == ChordFamily::Diminished && core.has(9)) || core.has(10) || core.has(11)
}

pub fn base_symbol(family: ChordFamily, seventh: SeventhKind, sixth: bool) -> &'static str {
    match family {
        ChordFamily::Major => match seventh {
            _ if sixth => "6",
            SeventhKind::Minor => "7",
            SeventhKind::Major => "Δ7",
            _ => "",
        },
        ChordFamily::Minor => match seventh {
            _ if sixth => "m6",
            SeventhKind::Minor => "m7",
            SeventhKind::Major => "mΔ7",
            _ => "m",
        },
        ChordFamily::Diminished => match seventh {
            SeventhKind::Diminished => "°7",
            SeventhKind::Minor => "ø7",
            _ => "°",
        },
        ChordFamily::Augmented => match seventh {
            SeventhKind::Minor => "7♯5",
            SeventhKind::Major => "Δ7♯5",
            _ => "+",
        },
        ChordFamily::Sus4 => match seventh {
            SeventhKind::Minor => "7sus",
            SeventhKind::Major => "Δ7sus",
            _ => "sus",
        },
        ChordFamily::Sus2 => match seventh {
            SeventhKind::Minor => "7sus2",
            SeventhKind::Major => "Δ7sus2",
            _ => "sus2",
        },
        ChordFamily::Power => "5",
    }
}
