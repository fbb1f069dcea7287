use std::cmp::Ordering;
use super::family::ChordFamily;
use super::interval::IntervalSet;

/// Display order for color tokens; anything unlisted sorts last.
const COLOR_ORDER: [&str; 22] = [
    "♭9",
    "9",
    "♯9",
    "11",
    "♯11",
    "♭13",
    "13",
    "♭7",
    "Δ7",
    "add9",
    "add11",
    "add13",
    "add2",
    "add4",
    "add♭3",
    "add3",
    "add♭5",
    "add5",
    "add♭6",
    "add6",
    "add♭7",
    "add7",
];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Extension {
    /// A stacked-third tension (9, 11 or 13) over a seventh chord.
    Natural(u8),

    /// A chromatic color tone, e.g. "♭9".
    Altered(&'static str),

    /// A color tone added without a seventh, e.g. "add9".
    Add(&'static str),
}

/// What the classifier needs to know about the chord around an extension.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ExtensionContext {
    pub family: ChordFamily,
    pub has_seventh: bool,
    pub has_major_third: bool,
    pub high9: bool,
    pub high11: bool,
    pub high13: bool,
}

/// Name a tone that isn't part of the chord's core.
/// A 9th/11th/13th only reads as a natural tension when it's voiced
/// above the octave and a seventh is present.
pub fn classify(interval: u8, ctx: &ExtensionContext) -> Option<Extension> {
    let ext = match interval {
        1 => Extension::Altered("♭9"),
        2 => {
            if !ctx.high9 {
                Extension::Add("add2")
            } else if ctx.has_seventh {
                Extension::Natural(9)
            } else {
                Extension::Add("add9")
            }
        }
        3 => {
            if ctx.has_major_third {
                Extension::Altered("♯9")
            } else if matches!(ctx.family, ChordFamily::Minor | ChordFamily::Diminished) {
                Extension::Add("add3")
            } else {
                Extension::Add("add♭3")
            }
        }
        4 => Extension::Add("add3"),
        5 => {
            if !ctx.high11 {
                Extension::Add("add4")
            } else if ctx.has_seventh {
                Extension::Natural(11)
            } else {
                Extension::Add("add11")
            }
        }
        6 => {
            if ctx.family == ChordFamily::Diminished {
                Extension::Add("add♭5")
            } else {
                Extension::Altered("♯11")
            }
        }
        7 => Extension::Add("add5"),
        8 => {
            if ctx.family == ChordFamily::Augmented {
                Extension::Add("add♭6")
            } else {
                Extension::Altered("♭13")
            }
        }
        9 => {
            if !ctx.high13 {
                Extension::Add("add6")
            } else if ctx.has_seventh {
                Extension::Natural(13)
            } else {
                Extension::Add("add13")
            }
        }
        10 => {
            if ctx.has_seventh {
                Extension::Altered("♭7")
            } else {
                Extension::Add("add♭7")
            }
        }
        11 => {
            if ctx.has_seventh {
                Extension::Altered("Δ7")
            } else {
                Extension::Add("add7")
            }
        }
        _ => return None,
    };
    Some(ext)
}

/// The classified extensions of one chord reading, deduplicated.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Extensions {
    pub naturals: Vec<u8>,
    pub altered: Vec<&'static str>,
    pub adds: Vec<&'static str>,
}

impl Extensions {
    /// Classify every interval that isn't in `core`.
    pub fn collect(intervals: &IntervalSet, core: &IntervalSet, ctx: &ExtensionContext) -> Extensions {
        let mut exts = Extensions::default();
        for interval in intervals.iter().filter(|i| !core.has(*i)) {
            if let Some(ext) = classify(interval, ctx) {
                exts.push(ext);
            }
        }
        exts.naturals.sort_unstable();
        exts
    }

    pub fn push(&mut self, ext: Extension) {
        match ext {
            Extension::Natural(degree) => {
                if !self.naturals.contains(&degree) {
                    self.naturals.push(degree);
                }
            }
            Extension::Altered(token) => {
                if !self.altered.contains(&token) {
                    self.altered.push(token);
                }
            }
            Extension::Add(token) => {
                if !self.adds.contains(&token) {
                    self.adds.push(token);
                }
            }
        }
    }

    pub fn has_add(&self, token: &str) -> bool {
        self.adds.iter().any(|t| *t == token)
    }

    /// All tokens in display order.
    pub fn tokens(&self) -> Vec<String> {
        let tokens = self.naturals.iter()
            .map(|n| n.to_string())
            .chain(self.altered.iter().map(|t| t.to_string()))
            .chain(self.adds.iter().map(|t| t.to_string()))
            .collect();
        sort_color_tokens(tokens)
    }
}

fn color_rank(token: &str) -> usize {
    COLOR_ORDER.iter().position(|t| *t == token).unwrap_or(999)
}

pub fn sort_color_tokens(mut tokens: Vec<String>) -> Vec<String> {
    tokens.sort_by(|a, b| match color_rank(a).cmp(&color_rank(b)) {
        Ordering::Equal => a.cmp(b),
        ord => ord,
    });
    tokens.dedup();
    tokens
}

#[cfg(test)]
mod test {
    use super::*;

    fn ctx(family: ChordFamily, has_seventh: bool, high: bool) -> ExtensionContext {
        ExtensionContext {
            family,
            has_seventh,
            has_major_third: family == ChordFamily::Major,
            high9: high,
            high11: high,
            high13: high,
        }
    }

    #[test]
    fn test_register_gating() {
        // Close to the root: always an add tone
        let low = ctx(ChordFamily::Major, true, false);
        assert_eq!(classify(2, &low), Some(Extension::Add("add2")));
        assert_eq!(classify(5, &low), Some(Extension::Add("add4")));
        assert_eq!(classify(9, &low), Some(Extension::Add("add6")));

        // Above the octave with a seventh: natural tensions
        let high = ctx(ChordFamily::Major, true, true);
        assert_eq!(classify(2, &high), Some(Extension::Natural(9)));
        assert_eq!(classify(5, &high), Some(Extension::Natural(11)));
        assert_eq!(classify(9, &high), Some(Extension::Natural(13)));

        // Above the octave without a seventh
        let high = ctx(ChordFamily::Major, false, true);
        assert_eq!(classify(2, &high), Some(Extension::Add("add9")));
        assert_eq!(classify(5, &high), Some(Extension::Add("add11")));
        assert_eq!(classify(9, &high), Some(Extension::Add("add13")));
    }

    #[test]
    fn test_family_context() {
        let major = ctx(ChordFamily::Major, false, false);
        let minor = ctx(ChordFamily::Minor, false, false);
        let dim = ctx(ChordFamily::Diminished, false, false);
        let aug = ctx(ChordFamily::Augmented, false, false);
        let sus = ctx(ChordFamily::Sus4, false, false);

        assert_eq!(classify(1, &minor), Some(Extension::Altered("♭9")));
        assert_eq!(classify(3, &major), Some(Extension::Altered("♯9")));
        assert_eq!(classify(3, &minor), Some(Extension::Add("add3")));
        assert_eq!(classify(3, &sus), Some(Extension::Add("add♭3")));
        assert_eq!(classify(4, &minor), Some(Extension::Add("add3")));
        assert_eq!(classify(6, &major), Some(Extension::Altered("♯11")));
        assert_eq!(classify(6, &dim), Some(Extension::Add("add♭5")));
        assert_eq!(classify(7, &dim), Some(Extension::Add("add5")));
        assert_eq!(classify(8, &major), Some(Extension::Altered("♭13")));
        assert_eq!(classify(8, &aug), Some(Extension::Add("add♭6")));
        assert_eq!(classify(0, &major), None);
        assert_eq!(classify(12, &major), None);
    }

    #[test]
    fn test_sevenths_as_extensions() {
        let with_seventh = ctx(ChordFamily::Major, true, false);
        let without = ctx(ChordFamily::Power, false, false);
        assert_eq!(classify(10, &with_seventh), Some(Extension::Altered("♭7")));
        assert_eq!(classify(11, &with_seventh), Some(Extension::Altered("Δ7")));
        assert_eq!(classify(10, &without), Some(Extension::Add("add♭7")));
        assert_eq!(classify(11, &without), Some(Extension::Add("add7")));
    }

    #[test]
    fn test_collect() {
        let intervals: IntervalSet = vec![0, 1, 2, 4, 7, 10].into_iter().collect();
        let core: IntervalSet = vec![0, 4, 7, 10].into_iter().collect();
        let exts = Extensions::collect(&intervals, &core, &ctx(ChordFamily::Major, true, true));
        assert_eq!(exts.naturals, vec![9]);
        assert_eq!(exts.altered, vec!["♭9"]);
        assert!(exts.adds.is_empty());
        assert_eq!(exts.tokens(), vec!["♭9", "9"]);
    }

    #[test]
    fn test_sort_color_tokens() {
        let tokens = vec!["add9", "13", "♯11", "♭9", "add9", "zz", "aa"]
            .into_iter().map(String::from).collect();
        assert_eq!(sort_color_tokens(tokens), vec!["♭9", "♯11", "13", "add9", "aa", "zz"]);
    }
}
