#![doc = include_str!("../README.md")]

// Core: curve mapping, unrolling and reduction.
pub mod curve;
pub mod error;
pub mod reduce;
pub mod unroll;

// Pipeline entry point and its diagnostics.
pub mod diagnostics;
pub mod sonifier;

// Collaborators at the boundary: image decoding, audio output, tool config.
pub mod audio;
pub mod config;
pub mod image;

// --- High-level re-exports -------------------------------------------------

pub use crate::curve::{CurvePoint, HilbertCurve};
pub use crate::error::SonifyError;
pub use crate::sonifier::{Sonifier, SonifyParams};

pub use crate::diagnostics::{PipelineTrace, SonificationReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hilbert_sonify::prelude::*;
///
/// # fn main() -> Result<(), SonifyError> {
/// let n = 64usize;
/// let gray = vec![0u8; n * n];
/// let img = ImageU8::packed(n, n, &gray);
///
/// let sonifier = Sonifier::new(SonifyParams::new(n, 16))?;
/// let means = sonifier.process(&img)?;
/// println!("{} tones: {:?}", means.len(), means);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::audio::{SynthOptions, ToneSink, WavSink};
    pub use crate::image::{GrayImageU8, ImageU8, ImageView};
    pub use crate::{Sonifier, SonifyError, SonifyParams};
}
