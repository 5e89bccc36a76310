//! Notation-level input: notes with a notated duration.

/// A note as written in a score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScoreNote {
    /// Pitch in Hz; 0 (`notes::REST`) for a rest
    pub frequency_hz: u16,
    /// Notated duration (see [`crate::durations`])
    pub notated: u8,
}

impl ScoreNote {
    pub const fn new(frequency_hz: u16, notated: u8) -> Self {
        Self { frequency_hz, notated }
    }

    pub const fn rest(notated: u8) -> Self {
        Self { frequency_hz: 0, notated }
    }

    pub const fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }
}

/// Zero-copy view over a score stored elsewhere (e.g. a static preset table).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreView<'a> {
    notes: &'a [ScoreNote],
}

impl<'a> ScoreView<'a> {
    pub const fn new(notes: &'a [ScoreNote]) -> Self {
        Self { notes }
    }

    pub const fn count(&self) -> usize {
        self.notes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a ScoreNote> {
        self.notes.get(index)
    }

    pub const fn as_slice(&self) -> &'a [ScoreNote] {
        self.notes
    }
}

impl<'a> From<&'a [ScoreNote]> for ScoreView<'a> {
    fn from(notes: &'a [ScoreNote]) -> Self {
        Self::new(notes)
    }
}

impl<'a, const N: usize> From<&'a [ScoreNote; N]> for ScoreView<'a> {
    fn from(notes: &'a [ScoreNote; N]) -> Self {
        Self::new(notes)
    }
}
