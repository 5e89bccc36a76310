//! Fixed limits shared by realtime playback and offline rendering.

use std::time::Duration;

/// Capacity of the controller's step buffer.
pub const MAX_MELODY_STEPS: usize = 64;

pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Peak level of the square wave, roughly a quarter of full scale.
pub const AMPLITUDE: i16 = 8_000;

/// Sleep between realtime polls. Timing resolution of live playback.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Time left for the audio callback to drain the final stop command.
pub const RELEASE_TAIL: Duration = Duration::from_millis(50);
