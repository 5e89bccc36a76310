//! End-to-end playback: compile with the builder, drive the player against
//! a simulated clock and check what the generator was told to do.

use bz_engine::{
    to_ms, GeneratorEvent, ManualClock, MelodyBuilder, Player, PlayerState, RecordingGenerator,
};
use bz_ir::{notes, presets, Melody, PresetId, Step};

type Recorder = RecordingGenerator<128>;

/// Advance 1 ms at a time, polling once per tick, until the player is idle
/// or `limit_ms` has passed. Returns the elapsed time.
fn run(player: &mut Player<'_, Recorder, &ManualClock>, clock: &ManualClock, limit_ms: u32) -> u32 {
    let mut elapsed = 0;
    player.poll();
    while player.is_playing() && elapsed < limit_ms {
        clock.advance_ms(1);
        elapsed += 1;
        for _ in 0..3 {
            player.poll();
        }
    }
    elapsed
}

#[test]
fn looping_melody_wraps_to_first_step() {
    let steps = [Step::tone(440, 100), Step::rest(50)];
    let clock = ManualClock::new(0);
    let mut player = Player::new(Recorder::new(), &clock);
    player.play(Melody::new(&steps), true);

    player.poll();
    clock.advance_ms(100);
    player.poll();
    player.poll();
    player.poll();
    assert_eq!(player.step_index(), 1);

    clock.advance_ms(50);
    player.poll();
    assert_eq!(player.state(), PlayerState::AdvanceStep);
    player.poll();
    assert_eq!(player.state(), PlayerState::StartStep);
    assert_eq!(player.step_index(), 0);
    player.poll();
    assert_eq!(player.generator().sounding(), Some(440));
}

#[test]
fn one_shot_melody_stops_once_at_the_end() {
    let steps = [Step::tone(440, 100), Step::rest(50)];
    let clock = ManualClock::new(0);
    let mut player = Player::new(Recorder::new(), &clock);
    player.play(Melody::new(&steps), false);

    player.poll();
    clock.advance_ms(100);
    for _ in 0..3 {
        player.poll();
    }
    let stops_before_end = player.generator().stop_count();

    clock.advance_ms(50);
    player.poll();
    player.poll();
    assert_eq!(player.state(), PlayerState::Idle);
    assert_eq!(player.generator().stop_count(), stops_before_end + 1);
    assert_eq!(player.generator().events().last(), Some(&GeneratorEvent::Stop));
}

#[test]
fn articulated_note_matches_notated_duration() {
    let mut buf = [Step::default(); 4];
    let mut builder = MelodyBuilder::new(&mut buf);
    builder.set_tempo(76).set_gap(15).add_note(notes::G5, 4);
    let melody = builder.finish().unwrap();

    assert_eq!(melody.steps(), &[Step::tone(784, 774), Step::rest(15)]);
    assert_eq!(melody.total_duration_ms(), u64::from(to_ms(4, 76).unwrap()));
}

#[test]
fn preset_plays_every_note_in_order() {
    let mut buf = [Step::default(); 16];
    let mut builder = MelodyBuilder::new(&mut buf);
    builder.append_score(presets::preset(PresetId::Startup));
    let melody = builder.finish().unwrap();

    let clock = ManualClock::new(0);
    let mut player = Player::new(Recorder::new(), &clock);
    player.play(melody, false);
    let elapsed = run(&mut player, &clock, 10_000);

    assert!(!player.is_playing());
    assert_eq!(u64::from(elapsed), melody.total_duration_ms());
    let started: Vec<u16> = player
        .generator()
        .events()
        .iter()
        .filter_map(|e| match e {
            GeneratorEvent::Start(hz) => Some(*hz),
            GeneratorEvent::Stop => None,
        })
        .collect();
    assert_eq!(started, [notes::G4, notes::C5, notes::E5, notes::G5, notes::C6]);
}

#[test]
fn demo_runs_to_completion() {
    let mut buf = [Step::default(); 64];
    let mut builder = MelodyBuilder::new(&mut buf);
    builder
        .set_tempo(presets::DEMO_BPM)
        .set_gap(presets::DEMO_GAP_MS)
        .append_score(presets::demo());
    let melody = builder.finish().unwrap();

    let clock = ManualClock::new(0);
    let mut player = Player::new(Recorder::new(), &clock);
    player.play(melody, false);
    let elapsed = run(&mut player, &clock, 60_000);

    assert_eq!(player.state(), PlayerState::Idle);
    assert_eq!(u64::from(elapsed), melody.total_duration_ms());
    assert_eq!(player.generator().sounding(), None);
}

#[test]
fn playback_survives_counter_wrap() {
    let steps = [Step::tone(1000, 20), Step::tone(2000, 20)];
    let clock = ManualClock::new(u32::MAX - 25_000);
    let mut player = Player::new(Recorder::new(), &clock);
    player.play(Melody::new(&steps), false);
    let elapsed = run(&mut player, &clock, 1000);
    assert_eq!(elapsed, 40);
    assert_eq!(player.state(), PlayerState::Idle);
}

#[test]
fn late_polls_delay_but_do_not_skip_steps() {
    let steps = [Step::tone(440, 10), Step::tone(880, 10), Step::tone(1760, 10)];
    let clock = ManualClock::new(0);
    let mut player = Player::new(Recorder::new(), &clock);
    player.play(Melody::new(&steps), false);

    player.poll();
    // one very late poll per step
    while player.is_playing() {
        clock.advance_ms(500);
        for _ in 0..3 {
            player.poll();
        }
    }
    assert_eq!(
        player.generator().events(),
        &[
            GeneratorEvent::Start(440),
            GeneratorEvent::Start(880),
            GeneratorEvent::Start(1760),
            GeneratorEvent::Stop,
        ]
    );
}

#[test]
fn stop_mid_melody_silences_and_goes_idle() {
    let steps = [Step::tone(440, 100), Step::tone(880, 100)];
    let clock = ManualClock::new(0);
    let mut player = Player::new(Recorder::new(), &clock);
    player.play(Melody::new(&steps), true);
    player.poll();
    clock.advance_ms(30);
    player.poll();

    player.stop();
    assert!(!player.is_playing());
    assert_eq!(player.generator().sounding(), None);
    clock.advance_ms(500);
    player.poll();
    assert_eq!(player.generator().events().len(), 2);
}
