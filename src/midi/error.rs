use thiserror::Error;
use midir::{MidiInput, InitError, ConnectError, PortInfoError};

#[derive(Error, Debug)]
pub enum MIDIError {
    #[error("Invalid port index: {0}")]
    InvalidPort(usize),

    #[error("Couldn't initialize")]
    InitError(#[from] InitError),

    #[error("Couldn't read port name")]
    PortInfo(#[from] PortInfoError),

    #[error("Couldn't connect to input port")]
    InputConnect(#[from] ConnectError<MidiInput>),
}
