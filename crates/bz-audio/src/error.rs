//! Audio device errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device available")]
    NoDevice,
    #[error("device init error: {0}")]
    DeviceInit(#[from] cpal::DefaultStreamConfigError),
    #[error("stream create error: {0}")]
    StreamCreate(#[from] cpal::BuildStreamError),
    #[error("playback error: {0}")]
    Playback(#[from] cpal::PlayStreamError),
}
