use super::synth::{render_tones, SynthOptions};
use super::{check_tone_count, ToneSink};
use crate::error::Result;
use crate::image::io::create_parent_dir;
use hound::{SampleFormat, WavSpec, WavWriter};
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

/// Render `means` in memory and write the finished WAV file to `path`.
///
/// Parent directories are created as needed. Nothing touches the disk unless
/// the whole stream rendered, so a failed call leaves no partial file behind.
pub fn write_wav_file(
    path: &Path,
    options: SynthOptions,
    means: &[u8],
    tone_count: usize,
) -> Result<()> {
    options.validate()?;
    let mut sink = WavSink::new(Cursor::new(Vec::new()), options);
    sink.write_tones(means, tone_count)?;
    let bytes = sink.into_inner().into_inner();

    create_parent_dir(path)?;
    fs::write(path, &bytes)?;
    debug!("wav: {} bytes written to {}", bytes.len(), path.display());
    Ok(())
}

/// Writes each intensity vector as a mono 16-bit PCM WAV stream.
pub struct WavSink<W: Write + Seek> {
    writer: W,
    options: SynthOptions,
}

impl WavSink<BufWriter<File>> {
    /// Open `path` for writing, creating parent directories.
    pub fn create(path: &Path, options: SynthOptions) -> Result<Self> {
        options.validate()?;
        create_parent_dir(path)?;
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), options))
    }
}

impl<W: Write + Seek> WavSink<W> {
    pub fn new(writer: W, options: SynthOptions) -> Self {
        Self { writer, options }
    }

    pub fn options(&self) -> &SynthOptions {
        &self.options
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn spec(&self) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate: self.options.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }
}

impl<W: Write + Seek> ToneSink for WavSink<W> {
    fn write_tones(&mut self, means: &[u8], tone_count: usize) -> Result<()> {
        check_tone_count(means, tone_count)?;
        let pcm = render_tones(means, &self.options)?;
        let spec = self.spec();

        let mut wav = WavWriter::new(&mut self.writer, spec)?;
        for &sample in &pcm {
            wav.write_sample(sample)?;
        }
        wav.finalize()?;
        self.writer.flush()?;

        debug!(
            "wav: {tone_count} tones, {} samples at {} Hz",
            pcm.len(),
            spec.sample_rate
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SonifyError;

    #[test]
    fn writes_readable_mono_pcm() {
        let options = SynthOptions {
            sample_rate: 8000,
            tone_ms: 100,
            high_hz: 2000.0,
            ..Default::default()
        };
        let mut sink = WavSink::new(Cursor::new(Vec::new()), options);
        sink.write_tones(&[0, 128, 255, 64], 4).unwrap();

        let bytes = sink.into_inner().into_inner();
        let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(reader.len(), 4 * 800);

        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert!(samples[..800].iter().all(|&s| s == 0), "first tone is silent");
        assert!(samples[1600..2400].iter().any(|&s| s.unsigned_abs() > 20_000));
    }

    #[test]
    fn mismatched_tone_count_is_rejected() {
        let mut sink = WavSink::new(Cursor::new(Vec::new()), SynthOptions::default());
        assert!(matches!(
            sink.write_tones(&[1, 2, 3], 4),
            Err(SonifyError::ToneCountMismatch { expected: 4, actual: 3 })
        ));
        assert!(sink.into_inner().into_inner().is_empty());
    }

    #[test]
    fn wav_file_is_written_whole() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("tones.wav");
        let options = SynthOptions {
            sample_rate: 8000,
            tone_ms: 20,
            ..Default::default()
        };
        write_wav_file(&path, options, &[10, 200], 2).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len() as usize, 2 * options.samples_per_tone());
    }

    #[test]
    fn failed_render_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("tones.wav");
        assert!(matches!(
            write_wav_file(&path, SynthOptions::default(), &[1, 2, 3], 4),
            Err(SonifyError::ToneCountMismatch { expected: 4, actual: 3 })
        ));
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
    }
}
