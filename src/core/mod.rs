mod pitch;
mod note;
mod interval;
mod active;
mod voicing;
mod family;
mod extension;
mod symbol;
mod inversion;
mod score;
mod candidate;
mod fallback;
mod upper;
mod analysis;
mod spelling;

pub use note::Note;
pub use active::ActiveNotes;
pub use candidate::ChordCandidate;
pub use analysis::chord_candidates;
pub use spelling::{default_spelling, SpelledNote, SpellingContext};
