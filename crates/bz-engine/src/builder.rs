//! Score-to-steps compiler.
//!
//! The builder writes into a fixed buffer owned by the caller and never
//! fails loudly: the first error is latched, every later mutating call
//! becomes a no-op, and the caller checks once before trusting the result.

use bz_ir::{Melody, MelodyContext, ScoreNote, ScoreView, Step};
use log::{debug, warn};

use crate::duration::to_ms;
use crate::error::BuildError;

/// Fluent compiler from notes to [`Step`]s.
///
/// ```
/// use bz_engine::MelodyBuilder;
/// use bz_ir::{durations, notes, Step};
///
/// let mut buffer = [Step::default(); 16];
/// let mut builder = MelodyBuilder::new(&mut buffer);
/// builder
///     .set_tempo(120)
///     .set_gap(20)
///     .add_note(notes::A4, durations::QUARTER)
///     .add_rest(durations::EIGHTH);
///
/// let melody = builder.finish().unwrap();
/// assert_eq!(melody.count(), 3);
/// ```
#[derive(Debug)]
pub struct MelodyBuilder<'buf> {
    /// Step storage, reused across compilations
    buffer: &'buf mut [Step],
    /// Steps written so far
    len: usize,
    /// Tempo and gap applied to notated input
    ctx: MelodyContext,
    /// First failure, latched until `reset`
    status: Result<(), BuildError>,
}

impl<'buf> MelodyBuilder<'buf> {
    /// Create a builder over `buffer`. An empty buffer leaves it invalid.
    pub fn new(buffer: &'buf mut [Step]) -> Self {
        let status = capacity_status(buffer.len());
        Self { buffer, len: 0, ctx: MelodyContext::new(), status }
    }

    /// Forget all compiled steps, optionally restoring default tempo and gap.
    pub fn reset(&mut self, to_default: bool) -> &mut Self {
        self.len = 0;
        if to_default {
            self.ctx = MelodyContext::new();
        }
        self.status = capacity_status(self.buffer.len());
        self
    }

    /// Tempo in quarter notes per minute, 1–300.
    pub fn set_tempo(&mut self, bpm: u16) -> &mut Self {
        if self.is_valid() {
            if (MelodyContext::MIN_BPM..=MelodyContext::MAX_BPM).contains(&bpm) {
                self.ctx.bpm = bpm;
            } else {
                self.fail(BuildError::InvalidTempo(bpm));
            }
        }
        self
    }

    /// Articulation gap carved out of every tone, 0–1000 ms.
    pub fn set_gap(&mut self, gap_ms: u16) -> &mut Self {
        if self.is_valid() {
            if gap_ms <= MelodyContext::MAX_GAP_MS {
                self.ctx.gap_ms = gap_ms;
            } else {
                self.fail(BuildError::InvalidGap(gap_ms));
            }
        }
        self
    }

    /// Add a note; `frequency_hz == 0` adds a rest.
    ///
    /// Tones are split into the audible part and a trailing silence of the
    /// configured gap, clamped so at least `MIN_PLAYABLE_MS` stays audible.
    pub fn add_note(&mut self, frequency_hz: u16, notated: u8) -> &mut Self {
        if !self.is_valid() {
            return self;
        }
        let duration_ms = match to_ms(notated, self.ctx.bpm) {
            Ok(ms) => ms,
            Err(e) => {
                self.fail(e);
                return self;
            }
        };

        if frequency_hz == 0 {
            self.push(Step::rest(duration_ms));
            return self;
        }

        let (play_ms, rest_ms) = articulate(duration_ms, self.ctx.gap_ms);
        debug!(
            "note {} Hz 1/{}: total={} play={} rest={}",
            frequency_hz, notated, duration_ms, play_ms, rest_ms
        );
        if self.push(Step::tone(frequency_hz, play_ms)) && rest_ms > 0 {
            self.push(Step::rest(rest_ms));
        }
        self
    }

    /// Add a notated rest. Rests are never split.
    pub fn add_rest(&mut self, notated: u8) -> &mut Self {
        if !self.is_valid() {
            return self;
        }
        match to_ms(notated, self.ctx.bpm) {
            Ok(ms) => {
                self.push(Step::rest(ms));
            }
            Err(e) => self.fail(e),
        }
        self
    }

    /// Add a raw tone step, bypassing tempo and gap.
    pub fn add_tone_ms(&mut self, frequency_hz: u16, duration_ms: u32) -> &mut Self {
        self.push_raw(Step::tone(frequency_hz, duration_ms));
        self
    }

    /// Add a raw silent step.
    pub fn add_rest_ms(&mut self, duration_ms: u32) -> &mut Self {
        self.push_raw(Step::rest(duration_ms));
        self
    }

    /// Append every note of a score (a slice or a [`ScoreView`]).
    pub fn append_score<'s>(&mut self, score: impl Into<ScoreView<'s>>) -> &mut Self {
        for note in score.into().as_slice() {
            if !self.is_valid() {
                break;
            }
            self.add_note(note.frequency_hz, note.notated);
        }
        self
    }

    /// Append `count` notes produced by `reader(0..count)`.
    ///
    /// For scores that are not a contiguous slice: generated, decoded from
    /// external storage, parsed on the fly. The reader is not called again
    /// once the builder is invalid.
    pub fn append_score_with<F>(&mut self, count: usize, mut reader: F) -> &mut Self
    where
        F: FnMut(usize) -> ScoreNote,
    {
        for index in 0..count {
            if !self.is_valid() {
                break;
            }
            let note = reader(index);
            self.add_note(note.frequency_hz, note.notated);
        }
        self
    }

    /// Run `f` against the builder to group an arbitrary sequence of calls.
    pub fn compose<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        f(self);
        self
    }

    /// View over the compiled steps. Unchecked: a failed build yields the
    /// steps compiled before the first failure.
    pub fn build(&self) -> Melody<'_> {
        Melody::new(&self.buffer[..self.len])
    }

    /// [`build`](Self::build), or the first failure.
    pub fn finish(&self) -> Result<Melody<'_>, BuildError> {
        self.status.map(|()| self.build())
    }

    /// Give up the builder and keep the compiled steps borrowed for as long
    /// as the buffer itself, or return the first failure.
    pub fn into_melody(self) -> Result<Melody<'buf>, BuildError> {
        self.status?;
        let buffer: &'buf [Step] = self.buffer;
        Ok(Melody::new(&buffer[..self.len]))
    }

    pub fn is_valid(&self) -> bool {
        self.status.is_ok()
    }

    /// `Ok` while valid, otherwise the first failure.
    pub fn status(&self) -> Result<(), BuildError> {
        self.status
    }

    /// Number of compiled steps.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn context(&self) -> MelodyContext {
        self.ctx
    }

    fn push_raw(&mut self, step: Step) {
        if !self.is_valid() {
            return;
        }
        if step.duration_ms == 0 {
            self.fail(BuildError::ZeroDuration);
            return;
        }
        if step.duration_ms > MelodyContext::MAX_STEP_MS {
            self.fail(BuildError::StepTooLong(step.duration_ms));
            return;
        }
        self.push(step);
    }

    /// Bounds-checked write. Overflow latches `CapacityExceeded` and drops the step.
    fn push(&mut self, step: Step) -> bool {
        if !self.is_valid() {
            return false;
        }
        match self.buffer.get_mut(self.len) {
            Some(slot) => {
                *slot = step;
                debug!("step[{}] {} Hz {} ms", self.len, step.frequency_hz, step.duration_ms);
                self.len += 1;
                true
            }
            None => {
                self.fail(BuildError::CapacityExceeded { capacity: self.buffer.len() });
                false
            }
        }
    }

    fn fail(&mut self, error: BuildError) {
        if self.status.is_ok() {
            warn!("melody builder invalid after {} steps: {}", self.len, error);
            self.status = Err(error);
        }
    }
}

fn capacity_status(capacity: usize) -> Result<(), BuildError> {
    if capacity == 0 {
        Err(BuildError::CapacityExceeded { capacity })
    } else {
        Ok(())
    }
}

/// Split a tone of `duration_ms` into `(play, rest)` for a requested gap.
///
/// `play + rest == duration_ms`; the gap never eats into the last
/// `MIN_PLAYABLE_MS` of the tone, and tones that short are not split at all.
pub(crate) fn articulate(duration_ms: u32, gap_ms: u16) -> (u32, u32) {
    if gap_ms == 0 || duration_ms <= MelodyContext::MIN_PLAYABLE_MS {
        return (duration_ms, 0);
    }
    let max_gap = duration_ms - MelodyContext::MIN_PLAYABLE_MS;
    let rest_ms = (gap_ms as u32).min(max_gap);
    (duration_ms - rest_ms, rest_ms)
}
