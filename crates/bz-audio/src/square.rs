//! 50% duty-cycle square wave.

use bz_engine::SignalGenerator;

/// Phase-accumulator square wave. Outputs `±amplitude` while a tone is
/// started and 0 while stopped.
#[derive(Clone, Debug)]
pub struct SquareOscillator {
    sample_rate: u32,
    amplitude: i16,
    frequency_hz: u16,
    /// Position in the cycle, full u32 range = one period
    phase: u32,
    /// Phase advance per sample
    increment: u32,
}

impl SquareOscillator {
    pub fn new(sample_rate: u32, amplitude: i16) -> Self {
        Self {
            sample_rate: sample_rate.max(1),
            amplitude: amplitude.saturating_abs(),
            frequency_hz: 0,
            phase: 0,
            increment: 0,
        }
    }

    /// Frequency currently sounding, 0 when silent.
    pub fn frequency(&self) -> u16 {
        self.frequency_hz
    }

    pub fn next_sample(&mut self) -> i16 {
        if self.frequency_hz == 0 {
            return 0;
        }
        let high = self.phase < 1 << 31;
        self.phase = self.phase.wrapping_add(self.increment);
        if high {
            self.amplitude
        } else {
            -self.amplitude
        }
    }

    pub fn fill(&mut self, out: &mut [i16]) {
        for sample in out {
            *sample = self.next_sample();
        }
    }
}

impl SignalGenerator for SquareOscillator {
    fn start(&mut self, frequency_hz: u16) {
        if self.frequency_hz == 0 {
            self.phase = 0;
        }
        self.frequency_hz = frequency_hz;
        self.increment = (((frequency_hz as u64) << 32) / self.sample_rate as u64) as u32;
    }

    fn stop(&mut self) {
        self.frequency_hz = 0;
        self.increment = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_changes(samples: &[i16]) -> usize {
        samples.windows(2).filter(|w| w[0].signum() != w[1].signum()).count()
    }

    #[test]
    fn silent_until_started() {
        let mut osc = SquareOscillator::new(44100, 8000);
        let mut out = [1i16; 64];
        osc.fill(&mut out);
        assert!(out.iter().all(|&s| s == 0));
    }

    #[test]
    fn square_wave_alternates_at_amplitude() {
        let mut osc = SquareOscillator::new(44100, 8000);
        osc.start(441);
        let mut out = vec![0i16; 44100];
        osc.fill(&mut out);

        assert!(out.iter().all(|&s| s == 8000 || s == -8000));
        assert_eq!(out[0], 8000);
        assert_eq!(out[75], -8000);
        // 441 cycles, two edges each
        let edges = sign_changes(&out) as i64;
        assert!((edges - 882).abs() <= 2, "edges = {}", edges);
    }

    #[test]
    fn stop_silences_immediately() {
        let mut osc = SquareOscillator::new(8000, 100);
        osc.start(1000);
        osc.next_sample();
        osc.stop();
        assert_eq!(osc.next_sample(), 0);
        assert_eq!(osc.frequency(), 0);
    }

    #[test]
    fn negative_amplitude_is_folded() {
        let mut osc = SquareOscillator::new(8000, -300);
        osc.start(1000);
        assert_eq!(osc.next_sample(), 300);
    }
}
