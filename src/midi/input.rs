use super::MIDIError;
use midir::{MidiInput, MidiInputConnection};

pub struct MIDIInput {
    pub name: Option<String>,
    conn: Option<MidiInputConnection<()>>,
}

impl MIDIInput {
    pub fn new() -> MIDIInput {
        MIDIInput {
            name: None,
            conn: None,
        }
    }

    fn input(&self) -> Result<MidiInput, MIDIError> {
        Ok(MidiInput::new("chordlens input")?)
    }

    pub fn available_ports(&self) -> Result<Vec<String>, MIDIError> {
        let inp = self.input()?;
        let mut names = vec![];
        for port in inp.ports() {
            names.push(inp.port_name(&port)?);
        }
        Ok(names)
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Connect to the port at `idx`, replacing any current connection.
    pub fn connect_port<F>(&mut self, idx: usize, callback: F) -> Result<(), MIDIError>
        where F: FnMut(u64, &[u8], &mut ()) + Send + 'static {
        let inp = self.input()?;
        let inp_ports = inp.ports();
        if idx >= inp_ports.len() {
            Err(MIDIError::InvalidPort(idx))
        } else {
            self.close();
            let name = inp.port_name(&inp_ports[idx])?;
            let conn = inp.connect(&inp_ports[idx], "chordlens", callback, ())?;
            log::info!("Connected to MIDI input {}", name);
            self.conn = Some(conn);
            self.name = Some(name);
            Ok(())
        }
    }

    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            conn.close();
            if let Some(name) = self.name.take() {
                log::info!("Closed MIDI input {}", name);
            }
        }
    }
}

impl Default for MIDIInput {
    fn default() -> Self {
        MIDIInput::new()
    }
}
