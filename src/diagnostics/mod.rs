//! Diagnostics data model returned alongside the intensity vector.
//!
//! `SonificationReport` bundles the means with a `PipelineTrace` describing
//! the input, per-stage timings and simple statistics of each stage output.

pub mod pipeline;
pub mod timing;

pub use pipeline::{InputDescriptor, PipelineTrace, SampleStats, SonificationReport};
pub use timing::{StageTiming, TimingBreakdown};
