//! WAV encoding for 16-bit mono PCM.

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

pub fn write_wav<W: Write + Seek>(
    w: W,
    samples: &[i16],
    sample_rate: u32,
) -> Result<(), hound::Error> {
    let mut writer = WavWriter::new(w, wav_spec(sample_rate))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

pub fn write_wav_file(
    path: impl AsRef<Path>,
    samples: &[i16],
    sample_rate: u32,
) -> Result<(), hound::Error> {
    let mut writer = WavWriter::create(path, wav_spec(sample_rate))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

pub fn samples_to_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, hound::Error> {
    let mut buf = Vec::new();
    write_wav(Cursor::new(&mut buf), samples, sample_rate)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_describes_mono_16_bit() {
        let bytes = samples_to_wav(&[0, 1000, -1000, 0], 8000).unwrap();
        let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(reader.len(), 4);
    }

    #[test]
    fn samples_survive_encoding() {
        let input = [0i16, 8000, -8000, 8000];
        let bytes = samples_to_wav(&input, 44_100).unwrap();
        let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let decoded: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
        assert_eq!(decoded, input);
    }
}
