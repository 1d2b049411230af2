mod config;
mod input;
mod mirror;
mod terminal;

use std::{
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use console::{spawn_ticker, ChannelTransport, Console, LineInterpreter, RedrawClock, RedrawPacer};
use crossbeam_channel::{select, unbounded};
use storage::DirectoryCatalog;
use tracing_subscriber::EnvFilter;

use crate::{
    config::load_settings,
    input::{spawn_reader, OperatorInput, HELP},
    mirror::spawn_mirror,
    terminal::TerminalSink,
};

#[derive(Parser, Debug)]
#[command(about = "Operator console for a CNC pendant")]
struct Cli {
    /// Settings file; `pendant.toml` is read when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    jobs_dir: Option<PathBuf>,
    /// TCP address that receives every transmitted command.
    #[arg(long)]
    mirror_addr: Option<String>,
    /// Used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
    #[arg(long)]
    tick_ms: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .with_context(|| format!("invalid log level '{}'", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(dir) = cli.jobs_dir {
        settings.jobs_dir = dir;
    }
    if let Some(addr) = cli.mirror_addr {
        settings.mirror_addr = Some(addr);
    }
    if let Some(tick_ms) = cli.tick_ms {
        settings.tick_period_ms = tick_ms;
    }
    tracing::debug!(?settings, "settings loaded");

    let catalog = DirectoryCatalog::new(&settings.jobs_dir);
    let job_listing = storage::listing(&catalog);
    let jobs: Vec<String> = storage::parse_listing(&job_listing)
        .into_iter()
        .map(str::to_string)
        .collect();
    tracing::info!(dir = %catalog.root().display(), count = jobs.len(), "job files listed");

    let (transport, frames) = ChannelTransport::bounded(settings.mirror_queue);
    let mirror = spawn_mirror(settings.mirror_addr.clone(), frames);

    let mut console = Console::new(
        settings.console_config(),
        LineInterpreter::new(),
        transport,
        TerminalSink::new(),
    );
    console.note("Ready.\n");

    let (input_tx, input_rx) = unbounded();
    let _reader = spawn_reader(BufReader::new(io::stdin()), jobs.clone(), input_tx);

    let clock = RedrawClock::new();
    let (tick_tx, tick_rx) = unbounded();
    let _ticker = spawn_ticker(clock.clone(), settings.tick_period(), tick_tx);
    let mut pacer = RedrawPacer::default();

    let stdout = io::stdout();
    loop {
        select! {
            recv(input_rx) -> input => match input {
                Ok(OperatorInput::Events(events)) => {
                    for event in &events {
                        console.handle_event(event);
                    }
                }
                Ok(OperatorInput::Jobs) => {
                    if jobs.is_empty() {
                        console.note("No job files.\n");
                    } else {
                        console.note(&job_listing);
                    }
                }
                Ok(OperatorInput::Help) => println!("{HELP}"),
                Ok(OperatorInput::Unknown(message)) => {
                    tracing::warn!(%message, "operator input ignored");
                    println!("? {message} (type 'help')");
                }
                Ok(OperatorInput::Quit) | Err(_) => break,
            },
            recv(tick_rx) -> _ => {
                if pacer.due(&clock) {
                    let pending = console.pending().to_string();
                    console.sink_mut().draw(&mut stdout.lock(), &pending);
                }
            }
        }
    }

    tracing::info!(
        machine = ?console.dispatcher().interpreter().state(),
        "shutting down"
    );
    drop(console);
    if mirror.join().is_err() {
        tracing::error!("mirror thread panicked");
    }
    Ok(())
}
