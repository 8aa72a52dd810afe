use thiserror::Error;

/// Errors reported by the curve mapper, the unroller, the reducer and the
/// tone sinks.
#[derive(Debug, Error)]
pub enum SonifyError {
    #[error("image must be square, got {width}x{height}")]
    NotSquare { width: usize, height: usize },

    #[error("dimension {0} is not a power of two in [2, 65536]")]
    UnsupportedDimension(usize),

    #[error("image is {actual}x{actual} but the pipeline is configured for {expected}x{expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("row {row} holds {len} samples, expected at least {expected}")]
    ShortRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("sequence holds {len} samples, expected {expected}")]
    SequenceLength { len: usize, expected: usize },

    #[error("coordinate ({x}, {y}) lies outside a {dimension}x{dimension} curve")]
    CoordinateOutOfRange { x: u64, y: u64, dimension: usize },

    #[error("distance {distance} lies outside a curve of {len} cells")]
    DistanceOutOfRange { distance: u64, len: usize },

    #[error("tone count must be positive")]
    ZeroToneCount,

    #[error("cannot reduce an empty sequence")]
    EmptySequence,

    #[error("tone count {tone_count} does not evenly divide {samples} samples")]
    IndivisibleToneCount { tone_count: usize, samples: usize },

    #[error("hilbert distance {index} was never written")]
    CoverageGap { index: usize },

    #[error("hilbert distance {index} was written twice")]
    DuplicateDistance { index: usize },

    #[error("expected {expected} tone intensities, got {actual}")]
    ToneCountMismatch { expected: usize, actual: usize },

    #[error("invalid synth options: {0}")]
    InvalidSynthOptions(&'static str),

    #[error("failed to encode WAV: {0}")]
    Wav(#[from] hound::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SonifyError> = std::result::Result<T, E>;
