use midly::{live::LiveEvent, MidiMessage};
use super::{MIDIInput, MIDIError};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NoteEvent {
    On(isize),
    Off(isize),
}

/// Decode a raw message. Only note on/off matter;
/// a note on with zero velocity is a note off.
pub fn decode(msg: &[u8]) -> Option<NoteEvent> {
    let event = match LiveEvent::parse(msg) {
        Ok(event) => event,
        Err(err) => {
            log::debug!("Undecodable MIDI message {:?}: {}", msg, err);
            return None;
        }
    };
    match event {
        LiveEvent::Midi { message, .. } => match message {
            MidiMessage::NoteOn { key, vel } if vel.as_int() > 0 => {
                Some(NoteEvent::On(key.as_int() as isize))
            }
            MidiMessage::NoteOn { key, .. } | MidiMessage::NoteOff { key, .. } => {
                Some(NoteEvent::Off(key.as_int() as isize))
            }
            _ => None,
        },
        _ => None,
    }
}

/// A MIDI input that reports only note events.
pub struct MIDINotes {
    midi_in: MIDIInput,
}

impl MIDINotes {
    pub fn new() -> MIDINotes {
        MIDINotes {
            midi_in: MIDIInput::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.midi_in.name.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.midi_in.is_connected()
    }

    pub fn available_ports(&self) -> Result<Vec<String>, MIDIError> {
        self.midi_in.available_ports()
    }

    pub fn connect_port<F>(&mut self, idx: usize, mut note_fn: F) -> Result<(), MIDIError>
        where F: FnMut(NoteEvent) + Send + 'static {
        self.midi_in.connect_port(idx, move |_, msg, _| {
            if let Some(ev) = decode(msg) {
                note_fn(ev);
            }
        })
    }

    pub fn close(&mut self) {
        self.midi_in.close();
    }
}

impl Default for MIDINotes {
    fn default() -> Self {
        MIDINotes::new()
    }
}
