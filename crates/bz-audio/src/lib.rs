//! Square-wave signal generators for buzzer.
//!
//! [`SquareOscillator`] renders samples directly and doubles as the offline
//! generator; [`CpalTone`] plays through the default output device.

mod cpal_backend;
mod error;
mod square;

pub use cpal_backend::{CpalTone, ToneCommand};
pub use error::AudioError;
pub use square::SquareOscillator;
