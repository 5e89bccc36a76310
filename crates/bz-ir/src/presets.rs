//! Built-in scores for common UI sounds.
//!
//! Tables are `'static` and handed out as [`ScoreView`]s, so compiling a
//! preset never copies the score.

use core::fmt;
use core::str::FromStr;

use crate::durations::{EIGHTH, HALF, QUARTER, SIXTEENTH};
use crate::notes::*;
use crate::score::{ScoreNote, ScoreView};

/// Identifies a preset score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetId {
    Success,
    Error,
    Notification,
    Warning,
    Startup,
    Shutdown,
    ButtonClick,
}

impl PresetId {
    pub const ALL: [PresetId; 7] = [
        PresetId::Success,
        PresetId::Error,
        PresetId::Notification,
        PresetId::Warning,
        PresetId::Startup,
        PresetId::Shutdown,
        PresetId::ButtonClick,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PresetId::Success => "success",
            PresetId::Error => "error",
            PresetId::Notification => "notification",
            PresetId::Warning => "warning",
            PresetId::Startup => "startup",
            PresetId::Shutdown => "shutdown",
            PresetId::ButtonClick => "button-click",
        }
    }

    pub const fn score(self) -> ScoreView<'static> {
        preset(self)
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name matches no preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownPreset;

impl fmt::Display for UnknownPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown preset")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownPreset {}

impl FromStr for PresetId {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("click") {
            return Ok(PresetId::ButtonClick);
        }
        PresetId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownPreset)
    }
}

const fn n(frequency_hz: u16, notated: u8) -> ScoreNote {
    ScoreNote::new(frequency_hz, notated)
}

const SUCCESS: [ScoreNote; 4] = [n(C5, EIGHTH), n(E5, EIGHTH), n(G5, QUARTER), n(C6, HALF)];

const ERROR: [ScoreNote; 4] = [n(C6, EIGHTH), n(GS5, EIGHTH), n(E5, QUARTER), n(C5, HALF)];

const NOTIFICATION: [ScoreNote; 4] = [
    n(E5, SIXTEENTH),
    n(G5, SIXTEENTH),
    n(C6, EIGHTH),
    n(G5, EIGHTH),
];

const WARNING: [ScoreNote; 5] = [
    n(C5, EIGHTH),
    n(D5, EIGHTH),
    n(E5, EIGHTH),
    n(D5, EIGHTH),
    n(C5, QUARTER),
];

const STARTUP: [ScoreNote; 5] = [
    n(G4, EIGHTH),
    n(C5, EIGHTH),
    n(E5, EIGHTH),
    n(G5, EIGHTH),
    n(C6, QUARTER),
];

const SHUTDOWN: [ScoreNote; 5] = [
    n(C6, QUARTER),
    n(G5, EIGHTH),
    n(E5, EIGHTH),
    n(C5, EIGHTH),
    n(G4, EIGHTH),
];

const BUTTON_CLICK: [ScoreNote; 2] = [n(E5, SIXTEENTH), n(G5, SIXTEENTH)];

/// The score for a preset.
pub const fn preset(id: PresetId) -> ScoreView<'static> {
    match id {
        PresetId::Success => ScoreView::new(&SUCCESS),
        PresetId::Error => ScoreView::new(&ERROR),
        PresetId::Notification => ScoreView::new(&NOTIFICATION),
        PresetId::Warning => ScoreView::new(&WARNING),
        PresetId::Startup => ScoreView::new(&STARTUP),
        PresetId::Shutdown => ScoreView::new(&SHUTDOWN),
        PresetId::ButtonClick => ScoreView::new(&BUTTON_CLICK),
    }
}

/// Suggested tempo for [`demo`].
pub const DEMO_BPM: u16 = 76;
/// Suggested articulation gap for [`demo`].
pub const DEMO_GAP_MS: u16 = 15;

// Two phrases; the trailing half note is the "arrival".
const DEMO: [ScoreNote; 24] = [
    n(G5, QUARTER),
    n(D5, QUARTER),
    n(B5, QUARTER),
    n(G5, EIGHTH),
    n(D5, EIGHTH),
    n(C5, EIGHTH),
    n(B5, EIGHTH),
    n(A5, EIGHTH),
    n(G5, EIGHTH),
    n(G5, EIGHTH),
    n(FS5, EIGHTH),
    n(E5, EIGHTH),
    n(D5, EIGHTH),
    n(REST, EIGHTH),
    n(G5, QUARTER),
    n(A5, QUARTER),
    n(B5, QUARTER),
    n(REST, EIGHTH),
    n(D5, EIGHTH),
    n(C5, EIGHTH),
    n(B5, EIGHTH),
    n(A5, EIGHTH),
    n(G5, EIGHTH),
    n(D5, HALF),
];

/// A longer demonstration melody.
pub const fn demo() -> ScoreView<'static> {
    ScoreView::new(&DEMO)
}
