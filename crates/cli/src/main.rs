//! Stompbox CLI - guitar pedal effect playground.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use stompbox_core::{io, signal, AudioClip, DEFAULT_SAMPLE_RATE};
use stompbox_fx::{SignalChain, StageConfig};
use stompbox_realtime::{ChannelSink, HostCommand, TickReporter};
use stompbox_tuner::{estimate_f0, f0_to_note, YinConfig};
use tokio::sync::mpsc;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "stompbox")]
#[command(about = "Guitar pedal effect playground", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a WAV file through an effect chain
    Process {
        /// Input WAV path (defaults to the demo sine when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Use the built-in 440 Hz demo sine as input
        #[arg(long, conflicts_with = "input")]
        demo: bool,
        /// Chain description file (JSON list of stages)
        #[arg(long)]
        chain: PathBuf,
        /// Output WAV path
        #[arg(long, default_value = "processed.wav")]
        output: PathBuf,
    },
    /// Estimate the pitch of a recording
    Tune {
        /// Input WAV path (defaults to the demo sine when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Use the built-in 440 Hz demo sine as input
        #[arg(long, conflicts_with = "input")]
        demo: bool,
        /// Leading segment length to analyze, in seconds
        #[arg(long, default_value = "0.5")]
        seconds: f32,
    },
    /// Start the realtime tick reporter and print its notifications
    Monitor {
        /// Stop after this many seconds (runs until Ctrl-C when omitted)
        #[arg(long)]
        duration_secs: Option<f32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            demo: _,
            chain,
            output,
        } => process(input, &chain, &output),
        Commands::Tune {
            input,
            demo: _,
            seconds,
        } => tune(input, seconds),
        Commands::Monitor { duration_secs } => monitor(duration_secs).await,
    }
}

fn process(input: Option<PathBuf>, chain_path: &PathBuf, output: &PathBuf) -> Result<()> {
    let clip = load_input(input)?;

    let raw = std::fs::read_to_string(chain_path)
        .with_context(|| format!("failed to read chain file {}", chain_path.display()))?;
    let configs: Vec<StageConfig> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse chain file {}", chain_path.display()))?;
    let chain = SignalChain::from_configs(&configs);

    println!("Signal path: {}", chain.signal_path());

    let processed = AudioClip::new(
        chain.process(&clip.samples, clip.sample_rate),
        clip.sample_rate,
    );
    io::write_wav(output, &processed)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        stages = chain.len(),
        seconds = processed.duration_secs(),
        output = %output.display(),
        "processed clip written"
    );
    Ok(())
}

fn tune(input: Option<PathBuf>, seconds: f32) -> Result<()> {
    let clip = load_input(input)?;
    let segment = clip.leading(seconds);

    match estimate_f0(&segment, &YinConfig::default()).and_then(f0_to_note) {
        Some(note) => println!(
            "{} ({:.2} Hz) {:+} cents",
            note.name, note.frequency, note.cents
        ),
        None => println!("no pitch detected"),
    }
    Ok(())
}

async fn monitor(duration_secs: Option<f32>) -> Result<()> {
    let (sink, mut notifications) = ChannelSink::new();
    let (commands, command_rx) = mpsc::channel(8);
    let reporter = tokio::spawn(TickReporter::new(sink).run(command_rx));

    commands.send(HostCommand::Start).await?;
    info!("tick session started; printing notifications");

    let printer = async {
        while let Some(notification) = notifications.recv().await {
            println!("{}", serde_json::to_string(&notification)?);
        }
        Ok::<_, anyhow::Error>(())
    };

    match duration_secs {
        Some(secs) => {
            tokio::select! {
                result = printer => result?,
                _ = tokio::time::sleep(Duration::from_secs_f32(secs)) => {}
            }
        }
        None => {
            tokio::select! {
                result = printer => result?,
                _ = tokio::signal::ctrl_c() => {}
            }
        }
    }

    // closing the command channel tears the reporter down
    drop(commands);
    reporter.await?;
    Ok(())
}

fn load_input(input: Option<PathBuf>) -> Result<AudioClip> {
    match input {
        Some(path) => io::read_wav(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            info!("no input file given, using the 440 Hz demo sine");
            Ok(signal::sine(440.0, 2.0, DEFAULT_SAMPLE_RATE, 0.4))
        }
    }
}
