//! Deterministic offline rendering.
//!
//! Time is derived from the sample position instead of a wall clock, so the
//! same melody always produces the same samples.

use bz_audio::SquareOscillator;
use bz_engine::{ManualClock, Player, PlayerState};
use bz_ir::Melody;

use crate::config::AMPLITUDE;

/// Microsecond timestamp of sample `n`. Truncation wraps the same way the
/// hardware counter does.
fn sample_time_us(n: u64, sample_rate: u32) -> u32 {
    (n * 1_000_000 / u64::from(sample_rate)) as u32
}

/// Render `melody` as mono samples until it finishes or `max_samples` is
/// reached. A looping melody always runs to `max_samples`.
pub fn render_melody(
    melody: Melody<'_>,
    looping: bool,
    sample_rate: u32,
    max_samples: usize,
) -> Vec<i16> {
    if sample_rate == 0 {
        return Vec::new();
    }
    let clock = ManualClock::new(0);
    let mut player = Player::new(SquareOscillator::new(sample_rate, AMPLITUDE), &clock);
    player.play(melody, looping);

    let expected = melody.total_duration_ms() * u64::from(sample_rate) / 1000;
    let mut samples = Vec::with_capacity((expected as usize).min(max_samples));
    let mut n = 0u64;
    while player.is_playing() && samples.len() < max_samples {
        clock.set(sample_time_us(n, sample_rate));
        settle(&mut player);
        samples.push(player.generator_mut().next_sample());
        n += 1;
    }
    log::debug!("rendered {} samples at {} Hz", samples.len(), sample_rate);
    samples
}

/// Poll until no transition is pending for the current instant.
fn settle(player: &mut Player<'_, SquareOscillator, &ManualClock>) {
    player.poll();
    while matches!(
        player.state(),
        PlayerState::StartStep | PlayerState::AdvanceStep
    ) {
        player.poll();
    }
}
