//! Offline rendering through the controller.

use std::io::Cursor;

use bz_master::{
    samples_to_wav, Controller, ControllerError, PresetId, ScoreNote, ScoreSource, Settings,
    AMPLITUDE,
};

const RATE: u32 = 8000;

fn samples_per_ms() -> usize {
    (RATE / 1000) as usize
}

#[test]
fn preset_renders_for_its_full_duration() {
    let mut ctrl = Controller::new();
    let settings = Settings::default();
    let total_ms = ctrl
        .compile(&ScoreSource::Preset(PresetId::Success), &settings)
        .unwrap()
        .total_duration_ms() as usize;
    // eighth + eighth + quarter + half at 120 bpm
    assert_eq!(total_ms, 250 + 250 + 500 + 1000);

    let samples = ctrl
        .render(&ScoreSource::Preset(PresetId::Success), &settings, RATE, 10)
        .unwrap();
    let expected = total_ms * samples_per_ms();
    assert!(
        samples.len() >= expected && samples.len() <= expected + 2,
        "{} samples",
        samples.len()
    );
    assert!(samples[..expected].iter().all(|&s| s.abs() == AMPLITUDE));
}

#[test]
fn gap_is_silent() {
    let mut ctrl = Controller::new();
    let settings = Settings { tempo: 120, gap_ms: 50, looping: false };
    let source = ScoreSource::Notes(vec![ScoreNote::new(1000, 4), ScoreNote::new(1000, 4)]);
    let samples = ctrl.render(&source, &settings, RATE, 10).unwrap();

    let ms = samples_per_ms();
    // 450 ms tone, 50 ms gap, twice
    assert!(samples[..450 * ms].iter().all(|&s| s != 0));
    assert!(samples[450 * ms..500 * ms].iter().all(|&s| s == 0));
    assert!(samples[500 * ms..950 * ms].iter().all(|&s| s != 0));
    assert!(samples[950 * ms..].iter().all(|&s| s == 0));
}

#[test]
fn rests_are_silent() {
    let mut ctrl = Controller::new();
    let source = ScoreSource::parse_notes("R:4 A4:4").unwrap();
    let samples = ctrl.render(&source, &Settings::default(), RATE, 10).unwrap();
    let ms = samples_per_ms();
    assert!(samples[..500 * ms].iter().all(|&s| s == 0));
    assert!(samples[500 * ms..1000 * ms].iter().all(|&s| s != 0));
}

#[test]
fn looping_stops_at_the_time_limit() {
    let mut ctrl = Controller::new();
    let settings = Settings { looping: true, ..Settings::default() };
    let samples = ctrl
        .render(&ScoreSource::Preset(PresetId::ButtonClick), &settings, RATE, 2)
        .unwrap();
    assert_eq!(samples.len(), 2 * RATE as usize);
}

#[test]
fn non_looping_render_is_cut_at_the_time_limit() {
    let mut ctrl = Controller::new();
    let samples = ctrl
        .render(&ScoreSource::Demo, &Settings::demo(), RATE, 1)
        .unwrap();
    assert_eq!(samples.len(), RATE as usize);
}

#[test]
fn rendering_is_deterministic() {
    let mut ctrl = Controller::new();
    let a = ctrl.render(&ScoreSource::Demo, &Settings::demo(), RATE, 30).unwrap();
    let b = ctrl.render(&ScoreSource::Demo, &Settings::demo(), RATE, 30).unwrap();
    assert_eq!(a, b);
}

#[test]
fn build_errors_surface() {
    let mut ctrl = Controller::new();
    let settings = Settings { gap_ms: 5000, ..Settings::default() };
    let err = ctrl.render(&ScoreSource::Demo, &settings, RATE, 1).unwrap_err();
    assert!(matches!(err, ControllerError::Build(_)));
    assert!(err.to_string().contains("5000"));
}

#[test]
fn wav_holds_rendered_samples() {
    let mut ctrl = Controller::new();
    let samples = ctrl
        .render(&ScoreSource::Preset(PresetId::Notification), &Settings::default(), RATE, 5)
        .unwrap();
    let bytes = samples_to_wav(&samples, RATE).unwrap();
    let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    assert_eq!(reader.spec().sample_rate, RATE);
    assert_eq!(reader.len() as usize, samples.len());
}

#[test]
fn render_to_wav_writes_a_file() {
    let path = std::env::temp_dir().join(format!("bz-master-{}.wav", std::process::id()));
    let mut ctrl = Controller::new();
    let written = ctrl
        .render_to_wav(&path, &ScoreSource::Preset(PresetId::ButtonClick), &Settings::default(), RATE, 5)
        .unwrap();
    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.len() as usize, written);
    std::fs::remove_file(&path).unwrap();
}
