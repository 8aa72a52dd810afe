//! Audio output for intensity vectors.
//!
//! Index `0` of an intensity vector is one end of the Hilbert traversal and
//! index `T-1` the other; sinks map that position monotonically to pitch.

pub mod synth;
pub mod wav;

pub use synth::{render_tones, SynthOptions, ToneLadder};
pub use wav::{write_wav_file, WavSink};

use crate::error::{Result, SonifyError};

/// Consumer of tone intensity vectors.
pub trait ToneSink {
    /// Emit `tone_count` tones, one per entry of `means`.
    fn write_tones(&mut self, means: &[u8], tone_count: usize) -> Result<()>;
}

pub(crate) fn check_tone_count(means: &[u8], tone_count: usize) -> Result<()> {
    if tone_count == 0 {
        return Err(SonifyError::ZeroToneCount);
    }
    if means.len() != tone_count {
        return Err(SonifyError::ToneCountMismatch {
            expected: tone_count,
            actual: means.len(),
        });
    }
    Ok(())
}
