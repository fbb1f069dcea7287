use std::fmt;
use super::extension::Extensions;
use super::pitch::{self, PitchClass};

/// Swap a seventh chord's "7" for its highest natural tension,
/// e.g. "m7" with a 9th becomes "m9".
fn promoted(base: &str, highest: u8) -> Option<String> {
    match base {
        "7" => Some(highest.to_string()),
        "m7" => Some(format!("m{}", highest)),
        "Δ7" => Some(format!("Δ{}", highest)),
        "mΔ7" => Some(format!("mΔ{}", highest)),
        "7sus" => Some(match highest {
            13 => "13sus",
            11 => "11sus",
            _ => "9sus",
        }.to_string()),
        "7sus2" => Some(format!("{}sus2", highest)),
        _ => None,
    }
}

/// A chord name under construction: root, quality symbol,
/// color tokens and an optional slash bass.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ChordSymbol {
    root: PitchClass,
    bass: PitchClass,
    base: String,
    extensions: Extensions,
}

impl ChordSymbol {
    pub fn new(root: PitchClass, bass: PitchClass, base: &str, extensions: Extensions) -> ChordSymbol {
        ChordSymbol {
            root,
            bass,
            base: base.to_string(),
            extensions,
        }
    }

    /// Collapse a plain triad with add9 and add13 into "69"/"m69".
    pub fn six_nine(mut self, has_seventh: bool) -> ChordSymbol {
        let exts = &mut self.extensions;
        if has_seventh || !exts.altered.is_empty() {
            return self;
        }
        let has_add11 = exts.has_add("add11") || exts.has_add("add4");
        if (self.base.is_empty() || self.base == "m")
            && exts.has_add("add9") && exts.has_add("add13") && !has_add11 {
            self.base.push_str("69");
            exts.adds.retain(|t| *t != "add9" && *t != "add13");
        }
        self
    }

    /// When natural tensions are the only colors, fold the highest
    /// one into the symbol, e.g. "7" + (9, 13) becomes "13".
    /// Symbols with no longer form, e.g. "°7", just drop them.
    pub fn promote(mut self, allowed: bool) -> ChordSymbol {
        let exts = &mut self.extensions;
        if !allowed || !exts.altered.is_empty() || !exts.adds.is_empty() {
            return self;
        }
        if let Some(highest) = exts.naturals.iter().max().copied() {
            if let Some(base) = promoted(&self.base, highest) {
                self.base = base;
            }
        }
        exts.naturals.clear();
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn colors(&self) -> Vec<String> {
        self.extensions.tokens()
    }

    pub fn is_slash(&self) -> bool {
        self.root != self.bass
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut name = pitch::label(self.root).to_string();
        let colors = self.colors();
        if self.base.is_empty() && colors.len() == 1 && colors[0].starts_with("add") {
            name.push_str(&colors[0]);
        } else {
            name.push_str(&self.base);
            if !colors.is_empty() {
                name.push_str(&format!("({})", colors.join(",")));
            }
        }
        if self.is_slash() {
            name.push('/');
            name.push_str(pitch::label(self.bass));
        }
        write!(f, "{}", name)
    }
}
