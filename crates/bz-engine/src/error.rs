//! Builder failure reasons.

use core::fmt;

use bz_ir::MelodyContext;

/// Why a [`MelodyBuilder`](crate::MelodyBuilder) became invalid.
///
/// `InvalidTempo`, `InvalidGap`, `ZeroDuration` and `StepTooLong` are
/// invalid arguments;
/// the other two are conversion and capacity failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Tempo outside 1–300 BPM
    InvalidTempo(u16),
    /// Articulation gap above 1000 ms
    InvalidGap(u16),
    /// Raw step of 0 ms
    ZeroDuration,
    /// Raw step longer than `MelodyContext::MAX_STEP_MS`
    StepTooLong(u32),
    /// Notated duration or tempo of zero
    InvalidConversion { notated: u8, bpm: u16 },
    /// Step buffer is full (or was empty to begin with)
    CapacityExceeded { capacity: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidTempo(bpm) => write!(f, "tempo {} bpm outside 1-300", bpm),
            BuildError::InvalidGap(ms) => write!(f, "gap {} ms above 1000", ms),
            BuildError::ZeroDuration => write!(f, "step duration of 0 ms"),
            BuildError::StepTooLong(ms) => {
                write!(f, "step of {} ms exceeds {} ms", ms, MelodyContext::MAX_STEP_MS)
            }
            BuildError::InvalidConversion { notated, bpm } => {
                write!(f, "cannot convert 1/{} note at {} bpm", notated, bpm)
            }
            BuildError::CapacityExceeded { capacity } => {
                write!(f, "melody exceeds {} steps", capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}
