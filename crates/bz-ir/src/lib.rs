//! Score and step types for buzzer.
//!
//! A score is written as notes (frequency + notated duration). The engine
//! compiles it into [`Step`]s, the only thing the player understands.
//!
//! Designed to be `no_std` compatible.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod durations;
mod melody;
pub mod notation;
pub mod notes;
pub mod presets;
mod score;

pub use melody::{Melody, MelodyContext, Step};
pub use notation::{parse_note, parse_score, ParseError};
pub use notes::{note_hz, PitchClass};
pub use presets::PresetId;
pub use score::{ScoreNote, ScoreView};
