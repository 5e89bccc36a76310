//! The single-tone output the player drives.

use heapless::Vec;

/// Something that can sound one square-wave tone at a time.
///
/// Implementations must not block. If there is no hardware behind it, both
/// calls are no-ops.
pub trait SignalGenerator {
    /// Start (or retune) the tone.
    fn start(&mut self, frequency_hz: u16);

    /// Silence the output.
    fn stop(&mut self);
}

impl<G: SignalGenerator + ?Sized> SignalGenerator for &mut G {
    fn start(&mut self, frequency_hz: u16) {
        (**self).start(frequency_hz);
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}

/// Generator with nothing attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentGenerator;

impl SignalGenerator for SilentGenerator {
    fn start(&mut self, _frequency_hz: u16) {}

    fn stop(&mut self) {}
}

/// A command received by a [`RecordingGenerator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorEvent {
    Start(u16),
    Stop,
}

/// Simulated generator that records the first `N` commands it received.
///
/// Commands past `N` are counted but not stored.
#[derive(Clone, Debug, Default)]
pub struct RecordingGenerator<const N: usize> {
    events: Vec<GeneratorEvent, N>,
    dropped: usize,
    sounding: Option<u16>,
}

impl<const N: usize> RecordingGenerator<N> {
    pub const fn new() -> Self {
        Self { events: Vec::new(), dropped: 0, sounding: None }
    }

    pub fn events(&self) -> &[GeneratorEvent] {
        &self.events
    }

    /// Commands that did not fit.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Frequency currently sounding, if any.
    pub fn sounding(&self) -> Option<u16> {
        self.sounding
    }

    pub fn stop_count(&self) -> usize {
        self.events.iter().filter(|e| **e == GeneratorEvent::Stop).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }

    fn record(&mut self, event: GeneratorEvent) {
        if self.events.push(event).is_err() {
            self.dropped += 1;
        }
    }
}

impl<const N: usize> SignalGenerator for RecordingGenerator<N> {
    fn start(&mut self, frequency_hz: u16) {
        self.sounding = Some(frequency_hz);
        self.record(GeneratorEvent::Start(frequency_hz));
    }

    fn stop(&mut self) {
        self.sounding = None;
        self.record(GeneratorEvent::Stop);
    }
}
