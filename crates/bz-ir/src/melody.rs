//! Compiled steps and the melody view handed to the player.

/// One scheduled interval: a tone at `frequency_hz`, or silence when it is 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Step {
    /// Tone frequency in Hz; 0 is a rest
    pub frequency_hz: u16,
    /// How long the step lasts
    pub duration_ms: u32,
}

impl Step {
    /// A sounding step.
    pub const fn tone(frequency_hz: u16, duration_ms: u32) -> Self {
        Self { frequency_hz, duration_ms }
    }

    /// A silent step.
    pub const fn rest(duration_ms: u32) -> Self {
        Self { frequency_hz: 0, duration_ms }
    }

    pub const fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }
}

/// A compiled melody: a read-only view over steps owned elsewhere.
///
/// The backing storage (usually a builder's buffer) must stay untouched for as
/// long as the melody is being played; the borrow enforces that.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Melody<'a> {
    steps: &'a [Step],
}

impl<'a> Melody<'a> {
    /// A melody with no steps.
    pub const EMPTY: Melody<'static> = Melody { steps: &[] };

    pub const fn new(steps: &'a [Step]) -> Self {
        Self { steps }
    }

    pub const fn steps(&self) -> &'a [Step] {
        self.steps
    }

    /// Number of steps.
    pub const fn count(&self) -> usize {
        self.steps.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'a, Step> {
        self.steps.iter()
    }

    /// Sum of all step durations.
    pub fn total_duration_ms(&self) -> u64 {
        self.steps.iter().map(|s| s.duration_ms as u64).sum()
    }
}

impl<'a> From<&'a [Step]> for Melody<'a> {
    fn from(steps: &'a [Step]) -> Self {
        Self::new(steps)
    }
}

impl<'a> IntoIterator for Melody<'a> {
    type Item = &'a Step;
    type IntoIter = core::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Tempo and articulation settings used while compiling notes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MelodyContext {
    /// Beats (quarter notes) per minute
    pub bpm: u16,
    /// Silence carved out of the end of every tone
    pub gap_ms: u16,
}

impl MelodyContext {
    pub const DEFAULT_BPM: u16 = 120;
    pub const DEFAULT_GAP_MS: u16 = 0;
    pub const MIN_BPM: u16 = 1;
    pub const MAX_BPM: u16 = 300;
    pub const MAX_GAP_MS: u16 = 1000;

    /// Shortest tone the gap split may leave, so the tone stays audible.
    pub const MIN_PLAYABLE_MS: u32 = 10;

    /// Longest single step. Half the range of the microsecond counter, so a
    /// late poll still sees the step as elapsed.
    pub const MAX_STEP_MS: u32 = u32::MAX / 2 / 1000;

    pub const fn new() -> Self {
        Self { bpm: Self::DEFAULT_BPM, gap_ms: Self::DEFAULT_GAP_MS }
    }
}

impl Default for MelodyContext {
    fn default() -> Self {
        Self::new()
    }
}
