//! Notated duration to milliseconds.

use crate::error::BuildError;

/// Milliseconds in a whole note at 1 bpm: 60 000 ms per beat, four beats.
const WHOLE_NOTE_MS_AT_1_BPM: u32 = 60_000 * 4;

/// Length of a `1/notated` note at `bpm` (beat = quarter note).
///
/// `floor(240000 / (bpm * notated))`, but never below 1 ms so no zero-length
/// step can come out of a very fast tempo.
pub fn to_ms(notated: u8, bpm: u16) -> Result<u32, BuildError> {
    if notated == 0 || bpm == 0 {
        return Err(BuildError::InvalidConversion { notated, bpm });
    }
    let divisor = bpm as u32 * notated as u32;
    Ok((WHOLE_NOTE_MS_AT_1_BPM / divisor).max(1))
}
