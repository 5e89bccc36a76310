//! buzzer CLI: list presets, inspect compiled melodies, play them live or
//! render them to WAV.
//!
//! Usage:
//!   buzzer presets
//!   buzzer dump --preset success
//!   buzzer play --notes "G5:4 D5:8 R:8 B5:2" --tempo 100 --gap 20
//!   buzzer render --out demo.wav

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use bz_master::{Controller, PresetId, ScoreSource, Settings, DEFAULT_SAMPLE_RATE};

#[derive(Parser)]
#[command(name = "buzzer", version)]
#[command(about = "Compile note scores and play them on a square-wave tone")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in presets
    Presets,
    /// Print the compiled steps of a score
    Dump(SourceArgs),
    /// Play through the default audio device
    Play {
        #[command(flatten)]
        source: SourceArgs,
        /// Repeat until the time limit
        #[arg(long = "loop")]
        looping: bool,
        /// Stop after this many seconds
        #[arg(long, default_value_t = 60)]
        seconds: u64,
    },
    /// Render offline to a mono 16-bit WAV file
    Render {
        #[command(flatten)]
        source: SourceArgs,
        /// Output file
        #[arg(short, long)]
        out: PathBuf,
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,
        /// Repeat until the time limit
        #[arg(long = "loop")]
        looping: bool,
        /// Maximum length of the output
        #[arg(long, default_value_t = 300)]
        seconds: u32,
    },
}

/// Which score to compile and how. Without `--preset` or `--notes` the demo
/// tune is used at its own tempo and gap.
#[derive(Args)]
struct SourceArgs {
    /// Built-in preset (see `buzzer presets`)
    #[arg(short, long, conflicts_with = "notes")]
    preset: Option<PresetId>,
    /// Notes such as "G5:4 F#5:8 R:8"; the number is the notated duration
    #[arg(short, long)]
    notes: Option<String>,
    /// Beats per minute (1-300)
    #[arg(short, long)]
    tempo: Option<u16>,
    /// Silence carved from the end of each tone, in ms (0-1000)
    #[arg(short, long)]
    gap: Option<u16>,
}

impl SourceArgs {
    fn resolve(&self, looping: bool) -> Result<(ScoreSource, Settings)> {
        let (source, mut settings) = match (self.preset, &self.notes) {
            (Some(id), _) => (ScoreSource::Preset(id), Settings::default()),
            (None, Some(text)) => {
                let source = ScoreSource::parse_notes(text)
                    .with_context(|| format!("invalid --notes {:?}", text))?;
                (source, Settings::default())
            }
            (None, None) => (ScoreSource::Demo, Settings::demo()),
        };
        if let Some(tempo) = self.tempo {
            settings.tempo = tempo;
        }
        if let Some(gap) = self.gap {
            settings.gap_ms = gap;
        }
        settings.looping = looping;
        Ok((source, settings))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut ctrl = Controller::new();

    match cli.command {
        Command::Presets => list_presets(),
        Command::Dump(source) => {
            let (source, settings) = source.resolve(false)?;
            dump(&mut ctrl, &source, &settings)?;
        }
        Command::Play { source, looping, seconds } => {
            let (source, settings) = source.resolve(looping)?;
            info!("playing {:?} at {} bpm", source_name(&source), settings.tempo);
            ctrl.play_realtime(&source, &settings, Duration::from_secs(seconds))
                .context("playback failed")?;
        }
        Command::Render { source, out, sample_rate, looping, seconds } => {
            let (source, settings) = source.resolve(looping)?;
            println!("Rendering to {} at {} Hz...", out.display(), sample_rate);
            let written = ctrl
                .render_to_wav(&out, &source, &settings, sample_rate, seconds)
                .with_context(|| format!("cannot render {}", out.display()))?;
            println!(
                "Wrote {} samples ({:.2} s)",
                written,
                written as f64 / f64::from(sample_rate.max(1))
            );
        }
    }
    Ok(())
}

fn list_presets() {
    for id in PresetId::ALL {
        println!("{:<14} {} notes", id.name(), id.score().count());
    }
}

fn dump(ctrl: &mut Controller, source: &ScoreSource, settings: &Settings) -> Result<()> {
    let melody = ctrl.compile(source, settings)?;
    println!(
        "{}: {} steps at {} bpm, gap {} ms",
        source_name(source),
        melody.count(),
        settings.tempo,
        settings.gap_ms
    );
    for (i, step) in melody.iter().enumerate() {
        if step.is_rest() {
            println!("{:>3}  rest      {:>5} ms", i, step.duration_ms);
        } else {
            println!("{:>3}  {:>5} Hz  {:>5} ms", i, step.frequency_hz, step.duration_ms);
        }
    }
    println!("total {} ms", melody.total_duration_ms());
    Ok(())
}

fn source_name(source: &ScoreSource) -> &str {
    match source {
        ScoreSource::Preset(id) => id.name(),
        ScoreSource::Demo => "demo",
        ScoreSource::Notes(_) => "notes",
    }
}
