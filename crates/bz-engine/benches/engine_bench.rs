use bz_engine::{ManualClock, MelodyBuilder, Player, SilentGenerator};
use bz_ir::{presets, Step};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn compile_demo(c: &mut Criterion) {
    let mut buffer = [Step::default(); 64];
    let mut builder = MelodyBuilder::new(&mut buffer);
    c.bench_function("compile demo score", |b| {
        b.iter(|| {
            builder
                .reset(true)
                .set_tempo(presets::DEMO_BPM)
                .set_gap(presets::DEMO_GAP_MS)
                .append_score(presets::demo());
            black_box(builder.len())
        })
    });
}

fn poll_demo(c: &mut Criterion) {
    let mut buffer = [Step::default(); 64];
    let mut builder = MelodyBuilder::new(&mut buffer);
    builder.set_tempo(300).append_score(presets::demo());
    let melody = builder.build();

    let clock = ManualClock::new(0);
    let mut player = Player::new(SilentGenerator, &clock);
    player.play(melody, true);

    c.bench_function("poll at 1ms resolution", |b| {
        b.iter(|| {
            clock.advance(1_000);
            player.poll();
            black_box(player.state())
        })
    });
}

criterion_group!(benches, compile_demo, poll_demo);
criterion_main!(benches);
