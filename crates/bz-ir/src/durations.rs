//! Notated durations.
//!
//! A notated duration is the denominator of the note value: a quarter note
//! is `4`, an eighth `8`. It has no length in time until a tempo is applied
//! (one beat is a quarter note).

/// Whole note, four beats.
pub const WHOLE: u8 = 1;
/// Half note, two beats.
pub const HALF: u8 = 2;
/// Quarter note, one beat.
pub const QUARTER: u8 = 4;
/// Eighth note, half a beat.
pub const EIGHTH: u8 = 8;
/// Sixteenth note, a quarter beat.
pub const SIXTEENTH: u8 = 16;
/// Thirty-second note, an eighth of a beat.
pub const THIRTY_SECOND: u8 = 32;

/// All standard note values, longest first.
pub const ALL: [u8; 6] = [WHOLE, HALF, QUARTER, EIGHTH, SIXTEENTH, THIRTY_SECOND];
