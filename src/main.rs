mod app;
mod config;
mod core;
mod engine;
mod midi;

use clap::{Parser, ValueHint};
use std::{fs::File, io, path::PathBuf};
use app::{App, Summary, run_app};
use anyhow::Result;
use config::Config;
use crossterm::{
    execute,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tui::{
    Terminal,
    backend::CrosstermBackend,
};
use engine::Engine;
use midi::MIDINotes;
use crate::core::Note;

/// Names the chord you're holding.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Config file [default: <config dir>/chordlens/config.yaml]
    #[clap(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// MIDI input port to connect
    #[clap(short, long)]
    port: Option<usize>,

    /// List MIDI input ports and exit
    #[clap(short, long)]
    list_ports: bool,

    /// Debug-level logging
    #[clap(short, long)]
    verbose: bool,

    /// Notes to analyze once, e.g. "C4 E4 G4" or "60 64 67"
    #[clap(allow_hyphen_values = true)]
    notes: Vec<String>,
}

fn init_logging(verbose: bool) -> Result<()> {
    use simplelog::{LevelFilter, WriteLogger};

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chordlens")
        .join("chordlens.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path) {
        Ok(file) => file,
        Err(_) => File::create("/tmp/chordlens.log")?,
    };

    WriteLogger::init(log_level, simplelog::Config::default(), log_file)?;

    log::info!("chordlens starting (log level: {:?})", log_level);
    Ok(())
}

fn list_ports() -> Result<()> {
    let ports = MIDINotes::new()
        .available_ports()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    if ports.is_empty() {
        println!("No MIDI input ports");
    }
    for (i, name) in ports.iter().enumerate() {
        println!("{}: {}", i, name);
    }
    Ok(())
}

/// Analyze the given notes and print the result.
fn one_shot(names: &[String], config: &Config) -> Result<()> {
    let mut engine = Engine::new();
    for name in names {
        let note: Note = name.as_str().try_into()?;
        engine.note_on(note.semitones);
    }
    let summary = Summary::new(&engine.analyze(), config.alternatives);
    println!("Chord:        {}", summary.chord);
    println!("Inversion:    {}", summary.badge);
    println!("Notes:        {}", summary.notes);
    println!("Alternatives: {}", summary.alternatives_line());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = Config::load(args.config.as_deref())?;

    if args.list_ports {
        return list_ports();
    }
    if !args.notes.is_empty() {
        return one_shot(&args.notes, &config);
    }

    let mut app = App::new(&config);
    if let Some(idx) = args.port.or(config.midi_port) {
        app.connect_port(idx);
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("{:?}", err);
        println!("{:?}", err)
    }

    Ok(())
}
