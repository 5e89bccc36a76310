//! Headless controller for buzzer.
//!
//! Compiles scores into a fixed step buffer and drives them either through
//! the live audio device or through an offline square-wave renderer. The
//! CLI is a thin layer over this crate.

mod config;
mod render;
mod wav;

use std::path::Path;
use std::time::{Duration, Instant};

use bz_audio::CpalTone;
use bz_engine::{MelodyBuilder, MicrosClock, Player, SignalGenerator, StdClock};
use bz_ir::presets;
use log::{info, warn};
use thiserror::Error;

// Re-export common types so callers don't need bz-ir/bz-engine directly.
pub use bz_audio::AudioError;
pub use bz_engine::BuildError;
pub use bz_ir::{Melody, MelodyContext, ParseError, PresetId, ScoreNote, Step};

pub use config::{AMPLITUDE, DEFAULT_SAMPLE_RATE, MAX_MELODY_STEPS, POLL_INTERVAL, RELEASE_TAIL};
pub use render::render_melody;
pub use wav::{samples_to_wav, write_wav, write_wav_file};

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("cannot build melody: {0}")]
    Build(#[from] BuildError),
    #[error("audio output failed: {0}")]
    Audio(#[from] AudioError),
    #[error("cannot write WAV: {0}")]
    Wav(#[from] hound::Error),
}

/// Tempo, articulation and looping applied when a score is compiled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub tempo: u16,
    pub gap_ms: u16,
    pub looping: bool,
}

impl Settings {
    /// Tempo and gap the demo tune was written for.
    pub fn demo() -> Self {
        Self {
            tempo: presets::DEMO_BPM,
            gap_ms: presets::DEMO_GAP_MS,
            looping: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tempo: MelodyContext::DEFAULT_BPM,
            gap_ms: MelodyContext::DEFAULT_GAP_MS,
            looping: false,
        }
    }
}

/// Where the notes of a melody come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoreSource {
    Preset(PresetId),
    Demo,
    Notes(Vec<ScoreNote>),
}

impl ScoreSource {
    /// Parse a note list such as `"G5:4 D5:8 R:8"`.
    pub fn parse_notes(text: &str) -> Result<Self, ParseError> {
        let notes = bz_ir::parse_score(text).collect::<Result<Vec<_>, _>>()?;
        Ok(Self::Notes(notes))
    }

    fn append_to(&self, builder: &mut MelodyBuilder<'_>) {
        match self {
            Self::Preset(id) => builder.append_score(id.score()),
            Self::Demo => builder.append_score(presets::demo()),
            Self::Notes(notes) => builder.append_score_with(notes.len(), |i| notes[i]),
        };
    }
}

/// Owns the step buffer that compiled melodies borrow from.
pub struct Controller {
    buffer: [Step; MAX_MELODY_STEPS],
}

impl Controller {
    pub fn new() -> Self {
        Self {
            buffer: [Step::default(); MAX_MELODY_STEPS],
        }
    }

    /// Compile `source` under `settings`. The melody borrows the
    /// controller, so nothing else can rewrite the buffer while it is held.
    pub fn compile(
        &mut self,
        source: &ScoreSource,
        settings: &Settings,
    ) -> Result<Melody<'_>, ControllerError> {
        let mut builder = MelodyBuilder::new(&mut self.buffer);
        builder.set_tempo(settings.tempo).set_gap(settings.gap_ms);
        source.append_to(&mut builder);
        let melody = builder.into_melody()?;
        log::debug!(
            "compiled {} steps, {} ms",
            melody.count(),
            melody.total_duration_ms()
        );
        Ok(melody)
    }

    // --- Real-time playback ---

    /// Play through the default audio device, blocking until the melody
    /// ends or `max_duration` has passed.
    pub fn play_realtime(
        &mut self,
        source: &ScoreSource,
        settings: &Settings,
        max_duration: Duration,
    ) -> Result<(), ControllerError> {
        let melody = self.compile(source, settings)?;
        let mut output = CpalTone::open(AMPLITUDE)?;
        info!("audio output at {} Hz", output.sample_rate());

        let started = Instant::now();
        let mut player = Player::new(&mut output, StdClock::new());
        player.play(melody, settings.looping);
        while player.is_playing() {
            if started.elapsed() >= max_duration {
                if !settings.looping {
                    warn!("playback cut off after {:?}", max_duration);
                }
                break;
            }
            poll(&mut player);
            std::thread::sleep(POLL_INTERVAL);
        }
        player.stop();
        drop(player);
        std::thread::sleep(RELEASE_TAIL);
        Ok(())
    }

    // --- Offline rendering ---

    /// Render to mono 16-bit samples, at most `max_seconds` long.
    pub fn render(
        &mut self,
        source: &ScoreSource,
        settings: &Settings,
        sample_rate: u32,
        max_seconds: u32,
    ) -> Result<Vec<i16>, ControllerError> {
        let melody = self.compile(source, settings)?;
        let max_samples = (u64::from(sample_rate) * u64::from(max_seconds)) as usize;
        Ok(render_melody(melody, settings.looping, sample_rate, max_samples))
    }

    /// Render and write a WAV file. Returns the number of samples written.
    pub fn render_to_wav(
        &mut self,
        path: impl AsRef<Path>,
        source: &ScoreSource,
        settings: &Settings,
        sample_rate: u32,
        max_seconds: u32,
    ) -> Result<usize, ControllerError> {
        let samples = self.render(source, settings, sample_rate, max_seconds)?;
        write_wav_file(path.as_ref(), &samples, sample_rate)?;
        info!("wrote {} samples to {}", samples.len(), path.as_ref().display());
        Ok(samples.len())
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "alloc_check")]
fn poll<G: SignalGenerator, C: MicrosClock>(player: &mut Player<'_, G, C>) {
    assert_no_alloc::assert_no_alloc(|| player.poll());
}

#[cfg(not(feature = "alloc_check"))]
fn poll<G: SignalGenerator, C: MicrosClock>(player: &mut Player<'_, G, C>) {
    player.poll();
}
