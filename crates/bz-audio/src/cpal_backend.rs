//! Realtime square-wave output through CPAL.
//!
//! The player thread never touches the stream: `start`/`stop` push a
//! [`ToneCommand`] into a lock-free ring buffer and the audio callback
//! applies queued commands before rendering each block.

use bz_engine::SignalGenerator;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Stream, StreamConfig};
use log::{error, info, warn};
use ringbuf::traits::{Consumer, Producer, Split};
use ringbuf::{HeapProd, HeapRb};

use crate::error::AudioError;
use crate::square::SquareOscillator;

/// Pending commands between the player and the audio callback.
const COMMAND_QUEUE_LEN: usize = 64;

/// Frames rendered per oscillator block inside the callback.
const BLOCK_FRAMES: usize = 256;

/// Command sent to the audio callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToneCommand {
    Start(u16),
    Stop,
}

/// Square-wave generator on the default output device.
pub struct CpalTone {
    _stream: Stream,
    producer: HeapProd<ToneCommand>,
    sample_rate: u32,
}

impl CpalTone {
    /// Open the default output device and start a (silent) stream.
    pub fn open(amplitude: i16) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;
        let config: StreamConfig = device.default_output_config()?.into();
        let channels = config.channels.max(1) as usize;
        let sample_rate = config.sample_rate.0;

        let (producer, mut consumer) = HeapRb::<ToneCommand>::new(COMMAND_QUEUE_LEN).split();
        let mut osc = SquareOscillator::new(sample_rate, amplitude);

        let stream = device.build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                while let Some(command) = consumer.try_pop() {
                    match command {
                        ToneCommand::Start(hz) => osc.start(hz),
                        ToneCommand::Stop => osc.stop(),
                    }
                }
                let mut block = [0i16; BLOCK_FRAMES];
                for chunk in data.chunks_mut(channels * BLOCK_FRAMES) {
                    let frames = chunk.len() / channels;
                    osc.fill(&mut block[..frames]);
                    // Same sample on every channel
                    for (frame, &sample) in chunk.chunks_mut(channels).zip(&block[..frames]) {
                        frame.fill(f32::from(sample) / 32768.0);
                    }
                }
            },
            |err| error!("audio stream error: {}", err),
            None,
        )?;
        stream.play()?;
        info!("audio output open: {} Hz, {} channels", sample_rate, channels);

        Ok(Self { _stream: stream, producer, sample_rate })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn send(&mut self, command: ToneCommand) {
        if self.producer.try_push(command).is_err() {
            warn!("tone command queue full, dropped {:?}", command);
        }
    }
}

impl SignalGenerator for CpalTone {
    fn start(&mut self, frequency_hz: u16) {
        self.send(ToneCommand::Start(frequency_hz));
    }

    fn stop(&mut self) {
        self.send(ToneCommand::Stop);
    }
}
