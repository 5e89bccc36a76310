//! Cooperative playback scheduler.
//!
//! [`Player::poll`] must be called often (every main-loop pass or timer
//! tick). Each call performs one state transition in constant time and
//! returns; waiting for a step to finish is just returning early. A late
//! poll delays the next step by the lateness but never skips or corrupts one.

use bz_ir::{Melody, MelodyContext, Step};
use log::{debug, info, trace};

use crate::generator::SignalGenerator;
use crate::timer::{MicrosClock, StepTimer};

/// Scheduler state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerState {
    /// Nothing playing; `poll` does nothing
    #[default]
    Idle,
    /// Next poll sounds the current step and arms its timer
    StartStep,
    /// Waiting for the current step's timer
    PlayingStep,
    /// Next poll moves to the following step, loops, or stops
    AdvanceStep,
}

/// Plays a compiled [`Melody`] on a [`SignalGenerator`].
///
/// The player is the only thing that may drive the generator while a melody
/// is playing. The melody is borrowed for `'m`, so its storage cannot be
/// changed until the player is done with it.
pub struct Player<'m, G, C> {
    generator: G,
    timer: StepTimer<C>,
    melody: Option<Melody<'m>>,
    /// Index of the current step
    index: usize,
    looping: bool,
    state: PlayerState,
}

impl<'m, G: SignalGenerator, C: MicrosClock> Player<'m, G, C> {
    pub fn new(generator: G, clock: C) -> Self {
        Self {
            generator,
            timer: StepTimer::new(clock),
            melody: None,
            index: 0,
            looping: false,
            state: PlayerState::Idle,
        }
    }

    /// Queue `melody` from its first step. Playback starts on the next
    /// [`poll`](Self::poll). Anything already playing is stopped first.
    ///
    /// An empty melody is accepted and settles back to idle on the next poll.
    pub fn play(&mut self, melody: Melody<'m>, looping: bool) {
        info!("play {} steps, loop={}", melody.count(), looping);
        if self.is_playing() {
            self.stop();
        }
        self.melody = Some(melody);
        self.looping = looping;
        self.index = 0;
        self.state = PlayerState::StartStep;
    }

    /// Silence the generator and drop the melody. Safe to call when idle.
    pub fn stop(&mut self) {
        self.generator.stop();
        self.melody = None;
        self.looping = false;
        self.index = 0;
        self.state = PlayerState::Idle;
        self.timer.disarm();
    }

    pub fn is_playing(&self) -> bool {
        self.state != PlayerState::Idle
    }

    /// Run one state transition.
    pub fn poll(&mut self) {
        match self.state {
            PlayerState::Idle => {}
            PlayerState::StartStep => self.start_step(),
            PlayerState::PlayingStep => {
                if self.timer.is_elapsed() {
                    self.state = PlayerState::AdvanceStep;
                }
            }
            PlayerState::AdvanceStep => self.advance(),
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn step_index(&self) -> usize {
        self.index
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn melody(&self) -> Option<Melody<'m>> {
        self.melody
    }

    /// The step at the current index, if a melody is loaded.
    pub fn current_step(&self) -> Option<&'m Step> {
        self.melody.and_then(|m| m.get(self.index))
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    pub fn into_generator(self) -> G {
        self.generator
    }

    fn start_step(&mut self) {
        let Some(step) = self.current_step() else {
            debug!("no step at index {}, stopping", self.index);
            self.stop();
            return;
        };

        if step.is_rest() {
            self.generator.stop();
        } else {
            self.generator.start(step.frequency_hz);
        }
        // Steps past MAX_STEP_MS would never be seen as elapsed on a wrapping counter
        let duration_ms = step.duration_ms.min(MelodyContext::MAX_STEP_MS);
        self.timer.arm(duration_ms * 1000);
        trace!("step {}: {} Hz {} ms", self.index, step.frequency_hz, step.duration_ms);

        self.state = PlayerState::PlayingStep;
    }

    fn advance(&mut self) {
        self.index += 1;
        let count = self.melody.map_or(0, |m| m.count());

        if self.index < count {
            self.state = PlayerState::StartStep;
        } else if self.looping && count > 0 {
            trace!("looping");
            self.index = 0;
            self.state = PlayerState::StartStep;
        } else {
            info!("melody finished");
            self.stop();
        }
    }
}
