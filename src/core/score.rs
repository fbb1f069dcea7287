//! Heuristic weights for ranking chord readings.
//! The constants are hand-tuned against each other;
//! changing one shifts which reading wins for ambiguous voicings.

use super::family::ChordFamily;
use super::interval::IntervalSet;

const ROOT_BASELINE: i32 = 72;
const SHELL_BASELINE: i32 = 34;

/// Where the bass sits relative to a reading's root.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BassRole {
    Root,
    ChordTone,
    Foreign,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TertianStrength {
    pub strength: i32,
    pub has_fifth: bool,
}

/// How completely the intervals spell a stacked-thirds chord.
pub fn tertian_strength(intervals: &IntervalSet, family: ChordFamily) -> TertianStrength {
    let has_third = intervals.has(3) || intervals.has(4);
    let has_fifth = intervals.has(family.fifth());
    let has_seventh = intervals.has(10) || intervals.has(11)
        || (family == ChordFamily::Diminished && intervals.has(9));

    let mut strength = 0;
    if has_third {
        strength += 12;
    }
    if has_fifth {
        strength += 14;
    }
    if has_seventh {
        strength += 10;
    }
    if has_third && has_fifth {
        strength += 8;
    }
    if has_third && has_fifth && has_seventh {
        strength += 8;
    }
    if intervals.has(5) && !has_third {
        strength -= 4;
    }
    TertianStrength { strength, has_fifth }
}

/// Everything the root-analysis score depends on.
#[derive(Debug, Clone)]
pub struct RootReading<'a> {
    pub family: ChordFamily,
    pub intervals: &'a IntervalSet,
    pub bass: BassRole,
    pub has_seventh: bool,
    pub added_sixth: bool,
    pub color_count: usize,
    pub high9: bool,
    pub high11: bool,
    pub symbol: &'a str,
}

pub fn root_score(reading: &RootReading) -> i32 {
    let intervals = reading.intervals;
    let family = reading.family;
    let has_third = intervals.has(3) || intervals.has(4);
    let inverted = reading.bass != BassRole::Root;
    let tertian = tertian_strength(intervals, family);

    let mut score = ROOT_BASELINE + tertian.strength;
    score += match reading.bass {
        BassRole::Root => 18,
        BassRole::ChordTone => -6,
        BassRole::Foreign => -14,
    };
    score += if has_third { 7 } else { -2 };
    if reading.has_seventh {
        score += 4;
    }
    score -= reading.color_count as i32;

    if family.is_major_or_minor() {
        score += 6;
    }
    if inverted {
        score -= 4;
    }
    if reading.added_sixth && inverted {
        score -= 10;
    }
    if intervals.len() <= 3 && inverted && has_third && !reading.has_seventh {
        score -= 8;
    }
    if family == ChordFamily::Sus2 && reading.high9 && !reading.has_seventh {
        score += 4;
    }
    if family == ChordFamily::Sus4 && reading.high11 && !reading.has_seventh {
        score += 3;
    }
    // A sus chord that also has a third contradicts itself
    if family.is_sus() && has_third {
        score -= 18;
    }
    if inverted && reading.has_seventh && !has_third {
        score -= 16;
    }
    if reading.symbol == "7sus2" {
        score -= 8;
    }
    if family.is_major_or_minor() && !tertian.has_fifth {
        score -= if reading.has_seventh { 8 } else { 26 };
    }
    score
}

/// Everything the looser shell-voicing score depends on.
#[derive(Debug, Copy, Clone)]
pub struct ShellReading<'a> {
    pub intervals: &'a IntervalSet,
    pub bass: BassRole,
    pub has_seventh: bool,
    pub color_count: usize,
    pub triadic_shell: bool,
}

pub fn shell_score(reading: &ShellReading) -> i32 {
    let intervals = reading.intervals;
    let has_third = intervals.has(3) || intervals.has(4);
    let has_fifth_like = intervals.has(6) || intervals.has(7) || intervals.has(8);
    let has_upper_color = [1, 2, 5, 9].iter().any(|i| intervals.has(*i));

    let mut score = SHELL_BASELINE;
    if has_third {
        score += 10;
    }
    if has_fifth_like {
        score += 7;
    }
    if reading.has_seventh {
        score += 8;
    }
    if has_upper_color {
        score += 2;
    }
    score += match reading.bass {
        BassRole::Root => 10,
        BassRole::ChordTone => -2,
        BassRole::Foreign => -10,
    };
    score -= reading.color_count as i32;
    if reading.triadic_shell {
        score += 6;
    }
    score
}

#[cfg(test)]
mod test {
    use super::*;

    fn set(intervals: &[u8]) -> IntervalSet {
        intervals.iter().copied().collect()
    }

    fn reading<'a>(family: ChordFamily, intervals: &'a IntervalSet, bass: BassRole) -> RootReading<'a> {
        RootReading {
            family,
            intervals,
            bass,
            has_seventh: false,
            added_sixth: false,
            color_count: 0,
            high9: false,
            high11: false,
            symbol: "",
        }
    }

    #[test]
    fn test_tertian_strength() {
        let full = tertian_strength(&set(&[0, 4, 7, 10]), ChordFamily::Major);
        assert_eq!(full, TertianStrength { strength: 52, has_fifth: true });

        let triad = tertian_strength(&set(&[0, 3, 6]), ChordFamily::Diminished);
        assert_eq!(triad, TertianStrength { strength: 34, has_fifth: true });

        let fifthless = tertian_strength(&set(&[0, 4, 10]), ChordFamily::Major);
        assert_eq!(fifthless, TertianStrength { strength: 22, has_fifth: false });

        let sus = tertian_strength(&set(&[0, 5, 7]), ChordFamily::Sus4);
        assert_eq!(sus, TertianStrength { strength: 10, has_fifth: true });
    }

    #[test]
    fn test_root_position_triad() {
        let intervals = set(&[0, 4, 7]);
        assert_eq!(root_score(&reading(ChordFamily::Major, &intervals, BassRole::Root)), 137);
    }

    #[test]
    fn test_inverted_triad() {
        let intervals = set(&[0, 4, 7]);
        assert_eq!(root_score(&reading(ChordFamily::Major, &intervals, BassRole::ChordTone)), 101);
    }

    #[test]
    fn test_missing_fifth_penalty() {
        let intervals = set(&[0, 3, 8]);
        let mut r = reading(ChordFamily::Minor, &intervals, BassRole::Root);
        r.color_count = 1;
        assert_eq!(root_score(&r), 88);
    }

    #[test]
    fn test_sus_contradiction() {
        let intervals = set(&[0, 4, 5, 7]);
        let contradicted = root_score(&reading(ChordFamily::Sus4, &intervals, BassRole::Root));
        assert_eq!(contradicted, 72 + 34 + 18 + 7 - 18);
    }

    #[test]
    fn test_shell_score() {
        let intervals = set(&[0, 5, 9]);
        let shell = ShellReading {
            intervals: &intervals,
            bass: BassRole::Foreign,
            has_seventh: false,
            color_count: 1,
            triadic_shell: false,
        };
        assert_eq!(shell_score(&shell), 25);
    }
}
