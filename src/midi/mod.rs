mod error;
mod input;
mod notes;

pub use error::MIDIError;
pub use input::MIDIInput;
pub use notes::{MIDINotes, NoteEvent};
