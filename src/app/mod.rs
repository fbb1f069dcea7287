mod select;
mod keyboard;
mod display;

pub use display::Summary;

use anyhow::Result;
use std::{
    sync::mpsc::{self, Receiver, Sender},
    time::{Duration, Instant},
};
use crate::config::Config;
use crate::engine::{Analysis, Engine};
use crate::midi::{MIDINotes, NoteEvent};
use tui::{
    Terminal,
    backend::Backend,
    widgets::Paragraph,
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Span, Spans},
};
use select::Select;
use keyboard::HeldKeys;
use crossterm::event::{self, Event, KeyCode};

const TICK_RATE: Duration = Duration::from_millis(50);

pub struct App {
    engine: Engine,
    analysis: Analysis,
    alternatives: usize,
    keys: HeldKeys,
    midi: MIDINotes,
    midi_error: Option<String>,
    select: Option<Select>,

    // MIDI callbacks run on midir's thread;
    // their events are applied here on the UI thread.
    sender: Sender<NoteEvent>,
    receiver: Receiver<NoteEvent>,
}

impl App {
    pub fn new(config: &Config) -> App {
        let mut engine = Engine::new();
        let analysis = engine.analyze();
        let (sender, receiver) = mpsc::channel();
        App {
            engine,
            analysis,
            alternatives: config.alternatives,
            keys: HeldKeys::new(config.keyboard.clone()),
            midi: MIDINotes::new(),
            midi_error: None,
            select: None,
            sender,
            receiver,
        }
    }

    pub fn connect_port(&mut self, idx: usize) {
        let sender = self.sender.clone();
        let res = self.midi.connect_port(idx, move |ev| {
            // The receiver only goes away when the app does
            let _ = sender.send(ev);
        });
        match res {
            Ok(()) => self.midi_error = None,
            Err(err) => {
                log::warn!("MIDI port {}: {}", idx, err);
                self.midi_error = Some(err.to_string());
            }
        }
    }

    fn apply(&mut self, ev: NoteEvent) {
        self.analysis = match ev {
            NoteEvent::On(note) => self.engine.note_on(note),
            NoteEvent::Off(note) => self.engine.note_off(note),
        };
    }

    fn drain_midi(&mut self) {
        while let Ok(ev) = self.receiver.try_recv() {
            self.apply(ev);
        }
    }

    fn release_keys(&mut self) {
        for ev in self.keys.release_all() {
            self.apply(ev);
        }
    }

    fn port_status(&self) -> String {
        if let Some(err) = &self.midi_error {
            format!("error: {}", err)
        } else if !self.midi.is_connected() {
            "not connected".to_string()
        } else {
            self.midi.name().unwrap_or("connected").to_string()
        }
    }

    fn open_port_select(&mut self) {
        match self.midi.available_ports() {
            Ok(ports) => self.select = Some(Select::new(ports)),
            Err(err) => {
                log::warn!("Couldn't list MIDI ports: {}", err);
                self.midi_error = Some(err.to_string());
            }
        }
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        app.drain_midi();

        terminal.draw(|frame| {
            let size = frame.size();
            let rects = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    // Main rect
                    Constraint::Min(6),

                    // Help rect
                    Constraint::Length(1),
                    ].as_ref())
                .split(size);

            let help = Paragraph::new(Spans::from(Span::raw(" [P]ort [Esc] release [Q]uit")))
                .alignment(Alignment::Left);
            frame.render_widget(help, rects[1]);

            match &app.select {
                None => {
                    let summary = Summary::new(&app.analysis, app.alternatives);
                    frame.render_widget(display::render(&summary, &app.port_status()), rects[0]);
                }
                Some(select) => {
                    let height = rects[0].height as usize;
                    frame.render_widget(select.render(height), rects[0]);
                }
            }
        })?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match &mut app.select {
                    // Midi port selection
                    Some(ref mut select) => {
                        let (selected, close) = select.process_input(key.code);
                        if close {
                            app.select = None;
                        }
                        if let Some(idx) = selected {
                            app.connect_port(idx);
                        }
                    },
                    None => {
                        match key.code {
                            KeyCode::Char('Q') => {
                                app.release_keys();
                                app.midi.close();
                                return Ok(());
                            },
                            // Change the MIDI input port
                            KeyCode::Char('P') => {
                                app.open_port_select();
                            }
                            KeyCode::Esc => {
                                app.release_keys();
                            }
                            KeyCode::Char(c) => {
                                if let Some(ev) = app.keys.press(c) {
                                    app.apply(ev);
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }
    }
}
