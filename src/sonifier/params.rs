//! Parameters of the image-to-intensity pipeline.

use crate::curve::validate_dimension;
use crate::error::Result;
use crate::reduce::block_size;
use serde::{Deserialize, Serialize};

/// Grid side and tone count threaded explicitly through one conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SonifyParams {
    /// Side of the square input grid; a power of two.
    pub dimension: usize,
    /// Number of intensities produced; must divide `dimension²`.
    pub tone_count: usize,
}

impl Default for SonifyParams {
    fn default() -> Self {
        Self {
            dimension: 256,
            tone_count: 64,
        }
    }
}

impl SonifyParams {
    pub fn new(dimension: usize, tone_count: usize) -> Self {
        Self {
            dimension,
            tone_count,
        }
    }

    pub fn samples(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Check every precondition and return the reducer's block size.
    pub fn validate(&self) -> Result<usize> {
        validate_dimension(self.dimension)?;
        block_size(self.samples(), self.tone_count)
    }
}
