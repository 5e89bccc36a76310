//! Text notation for scores.
//!
//! Tokens are separated by whitespace or commas:
//!
//! ```text
//! G5:4 D5:4 F#5:8 Bb4:8 R:2
//! ```
//!
//! `<letter>[#|b]<octave>:<denominator>` is a note, `R:<denominator>` a rest.
//! The denominator is not range-checked here; the builder rejects zero.

use core::fmt;

use crate::notes::{note_hz, PitchClass, REST};
use crate::score::ScoreNote;

/// Error while parsing a note token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Empty token
    Empty,
    /// No `:` separating pitch and duration
    MissingDuration,
    /// Letter is not A–G or R
    UnknownPitch,
    /// Octave missing or outside 0–8
    InvalidOctave,
    /// Duration is not a number in 0–255
    InvalidDuration,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty note"),
            ParseError::MissingDuration => write!(f, "expected <pitch>:<duration>"),
            ParseError::UnknownPitch => write!(f, "unknown pitch"),
            ParseError::InvalidOctave => write!(f, "octave must be 0-8"),
            ParseError::InvalidDuration => write!(f, "invalid duration"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Parse a single `pitch:duration` token.
pub fn parse_note(token: &str) -> Result<ScoreNote, ParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ParseError::Empty);
    }
    let (pitch, duration) = token.split_once(':').ok_or(ParseError::MissingDuration)?;
    let notated: u8 = duration.trim().parse().map_err(|_| ParseError::InvalidDuration)?;
    Ok(ScoreNote::new(parse_pitch(pitch.trim())?, notated))
}

/// Parse a whole score lazily, one result per token.
pub fn parse_score(text: &str) -> impl Iterator<Item = Result<ScoreNote, ParseError>> + '_ {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(parse_note)
}

fn parse_pitch(pitch: &str) -> Result<u16, ParseError> {
    let mut chars = pitch.chars();
    let letter = chars.next().ok_or(ParseError::UnknownPitch)?;
    if letter.eq_ignore_ascii_case(&'r') && chars.as_str().is_empty() {
        return Ok(REST);
    }

    let rest = chars.as_str();
    let (accidental, octave) = match rest.as_bytes().first() {
        Some(b'#') => (1, &rest[1..]),
        Some(b'b') => (-1, &rest[1..]),
        _ => (0, rest),
    };

    let (class, shift) = PitchClass::from_letter(letter, accidental).ok_or(ParseError::UnknownPitch)?;
    let octave: i8 = octave.parse().map_err(|_| ParseError::InvalidOctave)?;
    let octave = octave
        .checked_add(shift)
        .and_then(|o| u8::try_from(o).ok())
        .ok_or(ParseError::InvalidOctave)?;
    note_hz(class, octave).ok_or(ParseError::InvalidOctave)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::durations::{EIGHTH, HALF, QUARTER};
    use crate::notes::{AS4, B3, FS5, G5};

    #[test]
    fn plain_note() {
        assert_eq!(parse_note("G5:4"), Ok(ScoreNote::new(G5, QUARTER)));
    }

    #[test]
    fn sharps_and_flats() {
        assert_eq!(parse_note("F#5:8"), Ok(ScoreNote::new(FS5, EIGHTH)));
        assert_eq!(parse_note("Bb4:2"), Ok(ScoreNote::new(AS4, HALF)));
    }

    #[test]
    fn flat_crossing_octave_boundary() {
        // Cb4 is B3
        assert_eq!(parse_note("Cb4:4"), Ok(ScoreNote::new(B3, QUARTER)));
    }

    #[test]
    fn rest_token() {
        assert_eq!(parse_note("R:8"), Ok(ScoreNote::rest(EIGHTH)));
        assert_eq!(parse_note("r:8"), Ok(ScoreNote::rest(EIGHTH)));
    }

    #[test]
    fn malformed_tokens() {
        assert_eq!(parse_note(""), Err(ParseError::Empty));
        assert_eq!(parse_note("G5"), Err(ParseError::MissingDuration));
        assert_eq!(parse_note("H4:4"), Err(ParseError::UnknownPitch));
        assert_eq!(parse_note("G9:4"), Err(ParseError::InvalidOctave));
        assert_eq!(parse_note("G:4"), Err(ParseError::InvalidOctave));
        assert_eq!(parse_note("G4:x"), Err(ParseError::InvalidDuration));
        assert_eq!(parse_note("G4:256"), Err(ParseError::InvalidDuration));
    }

    #[test]
    fn zero_duration_is_left_to_the_builder() {
        assert_eq!(parse_note("G4:0"), Ok(ScoreNote::new(392, 0)));
    }

    #[test]
    fn score_with_commas_and_newlines() {
        let notes: Result<Vec<_>, _> = parse_score("G5:4, F#5:8\n  R:2").collect();
        let notes = notes.unwrap();
        assert_eq!(notes.len(), 3);
        assert!(notes[2].is_rest());
    }

    #[test]
    fn score_reports_bad_token() {
        let results: Vec<_> = parse_score("G5:4 X1:4").collect();
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(ParseError::UnknownPitch));
    }
}
