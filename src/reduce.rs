//! Block-averaging reduction of a Hilbert-ordered sequence into one
//! intensity per tone.
//!
//! The sequence is split into `tone_count` contiguous, equally sized blocks;
//! block `j` yields `floor(sum(block_j) / block_size)`. Sums are accumulated
//! in `u64`, so no block size can overflow. A tone count that does not
//! divide the sequence length is rejected rather than truncated.
use crate::error::{Result, SonifyError};

/// Number of samples averaged into one tone.
pub fn block_size(samples: usize, tone_count: usize) -> Result<usize> {
    if tone_count == 0 {
        return Err(SonifyError::ZeroToneCount);
    }
    if samples == 0 {
        return Err(SonifyError::EmptySequence);
    }
    if samples % tone_count != 0 {
        return Err(SonifyError::IndivisibleToneCount {
            tone_count,
            samples,
        });
    }
    Ok(samples / tone_count)
}

/// Truncated mean of each of the `tone_count` blocks of `sequence`, in
/// sequence order.
pub fn block_means(sequence: &[u8], tone_count: usize) -> Result<Vec<u8>> {
    let block = block_size(sequence.len(), tone_count)?;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        Ok(sequence.par_chunks_exact(block).map(block_mean).collect())
    }
    #[cfg(not(feature = "parallel"))]
    {
        Ok(sequence.chunks_exact(block).map(block_mean).collect())
    }
}

#[inline]
fn block_mean(block: &[u8]) -> u8 {
    let sum: u64 = block.iter().map(|&v| u64::from(v)).sum();
    // mean of u8 samples always fits in u8
    (sum / block.len() as u64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_floored() {
        assert_eq!(block_means(&[10, 20, 30, 40], 2).unwrap(), vec![15, 35]);
        assert_eq!(block_means(&[1, 2, 3, 4], 2).unwrap(), vec![1, 3]);
    }

    #[test]
    fn single_tone_averages_everything() {
        let seq = vec![255u8; 4096];
        assert_eq!(block_means(&seq, 1).unwrap(), vec![255]);
    }

    #[test]
    fn one_tone_per_sample_is_identity() {
        let seq: Vec<u8> = (0..=255).collect();
        assert_eq!(block_means(&seq, 256).unwrap(), seq);
    }

    #[test]
    fn large_blocks_do_not_overflow() {
        // 65536 * 255 exceeds u16 and a naive u8 accumulator by far
        let seq = vec![255u8; 1 << 16];
        assert_eq!(block_means(&seq, 1).unwrap(), vec![255]);
    }

    #[test]
    fn indivisible_tone_count_is_rejected() {
        assert!(matches!(
            block_means(&[0u8; 16], 5),
            Err(SonifyError::IndivisibleToneCount { tone_count: 5, samples: 16 })
        ));
        assert!(matches!(
            block_size(65536, 52),
            Err(SonifyError::IndivisibleToneCount { tone_count: 52, samples: 65536 })
        ));
    }

    #[test]
    fn zero_tones_and_empty_input_are_rejected() {
        assert!(matches!(block_means(&[1u8, 2], 0), Err(SonifyError::ZeroToneCount)));
        assert!(matches!(block_means(&[], 4), Err(SonifyError::EmptySequence)));
    }
}
