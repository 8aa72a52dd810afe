//! Image-to-intensity pipeline.
//!
//! Overview
//! - Validates the grid (square, power-of-two side matching the configured
//!   dimension, complete rows) before any work is done.
//! - Unrolls the grid along a Hilbert curve so that neighbouring pixels stay
//!   neighbours in the 1-D sequence.
//! - Averages consecutive, equally sized runs of that sequence into one
//!   intensity per tone.
//!
//! Modules
//! - [`params`] – the explicit `{dimension, tone_count}` configuration.
//! - `pipeline` – the [`Sonifier`] entry point.

pub mod params;
mod pipeline;

pub use params::SonifyParams;
pub use pipeline::Sonifier;
