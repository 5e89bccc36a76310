//! Note frequencies.
//!
//! Equal temperament tuned to A4 = 440 Hz, rounded to whole Hz, octaves 0–8.
//! Sharps are named `CS4`, `FS5`, … and double as the enharmonic flats.

/// The twelve pitch classes of an octave, starting at C.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PitchClass {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl PitchClass {
    /// Pitch class from its letter name and an accidental offset in semitones
    /// (+1 sharp, -1 flat). Wraps across the octave boundary, so the caller
    /// must adjust the octave for `Cb` / `B#`.
    pub fn from_letter(letter: char, accidental: i8) -> Option<(Self, i8)> {
        let natural: i8 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };
        let semitone = natural + accidental;
        let octave_shift = semitone.div_euclid(12);
        Some((Self::from_index(semitone.rem_euclid(12) as u8)?, octave_shift))
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0 => Self::C,
            1 => Self::Cs,
            2 => Self::D,
            3 => Self::Ds,
            4 => Self::E,
            5 => Self::F,
            6 => Self::Fs,
            7 => Self::G,
            8 => Self::Gs,
            9 => Self::A,
            10 => Self::As,
            11 => Self::B,
            _ => return None,
        })
    }
}

/// Highest octave in the table.
pub const MAX_OCTAVE: u8 = 8;

/// Frequencies by pitch class, then octave.
const TABLE: [[u16; 9]; 12] = [
    [16, 33, 65, 131, 262, 523, 1047, 2093, 4186],
    [17, 35, 69, 139, 277, 554, 1109, 2217, 4435],
    [18, 37, 73, 147, 294, 587, 1175, 2349, 4699],
    [19, 39, 77, 155, 311, 622, 1245, 2489, 4978],
    [21, 41, 82, 165, 330, 659, 1319, 2637, 5274],
    [22, 44, 87, 175, 349, 698, 1397, 2794, 5588],
    [23, 46, 92, 185, 370, 740, 1480, 2960, 5920],
    [25, 49, 98, 196, 392, 784, 1568, 3136, 6272],
    [26, 52, 104, 208, 415, 831, 1661, 3322, 6645],
    [27, 55, 110, 220, 440, 880, 1760, 3520, 7040],
    [29, 58, 116, 233, 466, 932, 1865, 3729, 7459],
    [31, 62, 123, 247, 494, 988, 1976, 3951, 7902],
];

/// Frequency of a pitch in a given octave, or `None` above octave 8.
pub const fn note_hz(pitch: PitchClass, octave: u8) -> Option<u16> {
    if octave > MAX_OCTAVE {
        return None;
    }
    Some(TABLE[pitch as usize][octave as usize])
}

/// Silence.
pub const REST: u16 = 0;

macro_rules! octave_row {
    ($pitch:expr; $($name:ident = $octave:literal),* $(,)?) => {
        $(pub const $name: u16 = TABLE[$pitch as usize][$octave];)*
    };
}

octave_row!(PitchClass::C; C0 = 0, C1 = 1, C2 = 2, C3 = 3, C4 = 4, C5 = 5, C6 = 6, C7 = 7, C8 = 8);
octave_row!(PitchClass::Cs; CS0 = 0, CS1 = 1, CS2 = 2, CS3 = 3, CS4 = 4, CS5 = 5, CS6 = 6, CS7 = 7, CS8 = 8);
octave_row!(PitchClass::D; D0 = 0, D1 = 1, D2 = 2, D3 = 3, D4 = 4, D5 = 5, D6 = 6, D7 = 7, D8 = 8);
octave_row!(PitchClass::Ds; DS0 = 0, DS1 = 1, DS2 = 2, DS3 = 3, DS4 = 4, DS5 = 5, DS6 = 6, DS7 = 7, DS8 = 8);
octave_row!(PitchClass::E; E0 = 0, E1 = 1, E2 = 2, E3 = 3, E4 = 4, E5 = 5, E6 = 6, E7 = 7, E8 = 8);
octave_row!(PitchClass::F; F0 = 0, F1 = 1, F2 = 2, F3 = 3, F4 = 4, F5 = 5, F6 = 6, F7 = 7, F8 = 8);
octave_row!(PitchClass::Fs; FS0 = 0, FS1 = 1, FS2 = 2, FS3 = 3, FS4 = 4, FS5 = 5, FS6 = 6, FS7 = 7, FS8 = 8);
octave_row!(PitchClass::G; G0 = 0, G1 = 1, G2 = 2, G3 = 3, G4 = 4, G5 = 5, G6 = 6, G7 = 7, G8 = 8);
octave_row!(PitchClass::Gs; GS0 = 0, GS1 = 1, GS2 = 2, GS3 = 3, GS4 = 4, GS5 = 5, GS6 = 6, GS7 = 7, GS8 = 8);
octave_row!(PitchClass::A; A0 = 0, A1 = 1, A2 = 2, A3 = 3, A4 = 4, A5 = 5, A6 = 6, A7 = 7, A8 = 8);
octave_row!(PitchClass::As; AS0 = 0, AS1 = 1, AS2 = 2, AS3 = 3, AS4 = 4, AS5 = 5, AS6 = 6, AS7 = 7, AS8 = 8);
octave_row!(PitchClass::B; B0 = 0, B1 = 1, B2 = 2, B3 = 3, B4 = 4, B5 = 5, B6 = 6, B7 = 7, B8 = 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concert_pitch() {
        assert_eq!(A4, 440);
        assert_eq!(note_hz(PitchClass::A, 4), Some(440));
    }

    #[test]
    fn named_constants_match_table() {
        assert_eq!(C0, 16);
        assert_eq!(G5, 784);
        assert_eq!(FS5, 740);
        assert_eq!(B8, 7902);
    }

    #[test]
    fn octave_out_of_range() {
        assert_eq!(note_hz(PitchClass::C, 9), None);
    }

    #[test]
    fn table_rises_within_each_octave() {
        for octave in 0..=MAX_OCTAVE {
            for pc in 1..12u8 {
                let lower = note_hz(PitchClass::from_index(pc - 1).unwrap(), octave).unwrap();
                let upper = note_hz(PitchClass::from_index(pc).unwrap(), octave).unwrap();
                assert!(upper > lower, "octave {} pitch {}", octave, pc);
            }
        }
    }

    #[test]
    fn letters_with_accidentals() {
        assert_eq!(PitchClass::from_letter('f', 1), Some((PitchClass::Fs, 0)));
        assert_eq!(PitchClass::from_letter('B', -1), Some((PitchClass::As, 0)));
        assert_eq!(PitchClass::from_letter('C', -1), Some((PitchClass::B, -1)));
        assert_eq!(PitchClass::from_letter('B', 1), Some((PitchClass::C, 1)));
        assert_eq!(PitchClass::from_letter('H', 0), None);
    }
}
