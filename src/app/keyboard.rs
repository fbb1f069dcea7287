use std::collections::HashSet;
use crate::config::KeyboardConfig;
use crate::midi::NoteEvent;

/// Computer keys played as notes. The terminal only reports
/// presses, so each press toggles that key's note.
pub struct HeldKeys {
    layout: KeyboardConfig,
    held: HashSet<char>,
}

impl HeldKeys {
    pub fn new(layout: KeyboardConfig) -> HeldKeys {
        HeldKeys {
            layout,
            held: HashSet::new(),
        }
    }

    pub fn is_held(&self, key: char) -> bool {
        self.held.contains(&key)
    }

    /// The note event for a key press, if the key plays a note.
    pub fn press(&mut self, key: char) -> Option<NoteEvent> {
        let note = self.layout.note_for(key)?;
        if self.held.remove(&key) {
            Some(NoteEvent::Off(note))
        } else {
            self.held.insert(key);
            Some(NoteEvent::On(note))
        }
    }

    /// Note offs for every held key.
    pub fn release_all(&mut self) -> Vec<NoteEvent> {
        let mut events: Vec<NoteEvent> = self.held.drain()
            .filter_map(|key| self.layout.note_for(key))
            .map(NoteEvent::Off)
            .collect();
        events.sort_by_key(|ev| match ev {
            NoteEvent::On(n) | NoteEvent::Off(n) => *n,
        });
        events
    }
}
