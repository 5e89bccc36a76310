//! Melody compiler and playback scheduler for buzzer.
//!
//! [`MelodyBuilder`] turns notes into [`Step`](bz_ir::Step)s inside a
//! caller-supplied buffer; [`Player`] walks the result in real time on a
//! [`SignalGenerator`], one bounded state transition per [`Player::poll`].
//!
//! Nothing here allocates, blocks, or sleeps.

#![cfg_attr(not(feature = "std"), no_std)]

mod builder;
mod duration;
mod error;
mod generator;
mod player;
mod timer;

pub use builder::MelodyBuilder;
pub use duration::to_ms;
pub use error::BuildError;
pub use generator::{GeneratorEvent, RecordingGenerator, SignalGenerator, SilentGenerator};
pub use player::{Player, PlayerState};
#[cfg(feature = "std")]
pub use timer::StdClock;
pub use timer::{FnClock, ManualClock, MicrosClock, StepTimer};
