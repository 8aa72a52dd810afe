//! Sine-burst synthesis of an intensity vector.
//!
//! Tone `j` plays for `tone_ms` at the `j`-th frequency of a [`ToneLadder`]
//! with amplitude `gain * intensity / 255`. Each burst ramps in and out
//! linearly over `fade_ms` to avoid clicks at tone boundaries.
use crate::error::{Result, SonifyError};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Options controlling tone rendering.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthOptions {
    pub sample_rate: u32,
    /// Duration of each tone in milliseconds.
    pub tone_ms: u32,
    /// Linear fade-in/out at both ends of each tone, in milliseconds.
    pub fade_ms: u32,
    /// Frequency of the first tone (B7 by default).
    pub high_hz: f32,
    /// Frequency of the last tone (A2 by default).
    pub low_hz: f32,
    /// Peak amplitude for a full-intensity tone, in `[0, 1]`.
    pub gain: f32,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            tone_ms: 150,
            fade_ms: 5,
            high_hz: 3951.07,
            low_hz: 110.0,
            gain: 0.8,
        }
    }
}

impl SynthOptions {
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(SonifyError::InvalidSynthOptions("sample_rate must be positive"));
        }
        if self.tone_ms == 0 {
            return Err(SonifyError::InvalidSynthOptions("tone_ms must be positive"));
        }
        if !(self.low_hz > 0.0 && self.low_hz <= self.high_hz) {
            return Err(SonifyError::InvalidSynthOptions(
                "frequencies must satisfy 0 < low_hz <= high_hz",
            ));
        }
        if self.high_hz >= self.sample_rate as f32 / 2.0 {
            return Err(SonifyError::InvalidSynthOptions(
                "high_hz must be below the Nyquist frequency",
            ));
        }
        if !(0.0..=1.0).contains(&self.gain) {
            return Err(SonifyError::InvalidSynthOptions("gain must lie in [0, 1]"));
        }
        Ok(())
    }

    pub fn samples_per_tone(&self) -> usize {
        (u64::from(self.sample_rate) * u64::from(self.tone_ms) / 1000) as usize
    }

    fn fade_samples(&self) -> usize {
        (u64::from(self.sample_rate) * u64::from(self.fade_ms) / 1000) as usize
    }
}

/// Frequencies assigned to tone positions, geometrically spaced from
/// `high_hz` (position 0) down to `low_hz` (last position).
#[derive(Clone, Debug, PartialEq)]
pub struct ToneLadder {
    frequencies: Vec<f32>,
}

impl ToneLadder {
    pub fn new(tone_count: usize, high_hz: f32, low_hz: f32) -> Self {
        let frequencies = match tone_count {
            0 => Vec::new(),
            1 => vec![high_hz],
            _ => {
                let ratio = low_hz / high_hz;
                let last = (tone_count - 1) as f32;
                (0..tone_count)
                    .map(|j| high_hz * ratio.powf(j as f32 / last))
                    .collect()
            }
        };
        Self { frequencies }
    }

    pub fn frequencies(&self) -> &[f32] {
        &self.frequencies
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Render `means` into mono 16-bit PCM, one burst per intensity.
pub fn render_tones(means: &[u8], options: &SynthOptions) -> Result<Vec<i16>> {
    options.validate()?;
    let ladder = ToneLadder::new(means.len(), options.high_hz, options.low_hz);
    let per_tone = options.samples_per_tone();
    let fade = options.fade_samples().min(per_tone / 2);
    let rate = options.sample_rate as f32;

    let mut pcm = Vec::with_capacity(per_tone * means.len());
    for (&intensity, &freq) in means.iter().zip(ladder.frequencies()) {
        let amplitude = options.gain * f32::from(intensity) / 255.0;
        let step = TAU * freq / rate;
        for i in 0..per_tone {
            let env = envelope(i, per_tone, fade);
            let v = (step * i as f32).sin() * amplitude * env;
            pcm.push((v * f32::from(i16::MAX)).round() as i16);
        }
    }
    Ok(pcm)
}

#[inline]
fn envelope(i: usize, len: usize, fade: usize) -> f32 {
    if fade == 0 {
        1.0
    } else if i < fade {
        i as f32 / fade as f32
    } else if i >= len - fade {
        (len - 1 - i) as f32 / fade as f32
    } else {
        1.0
    }
}
