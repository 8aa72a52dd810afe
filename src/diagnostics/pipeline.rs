use crate::diagnostics::TimingBreakdown;
use serde::Serialize;

/// Result produced by [`Sonifier::process_with_diagnostics`](crate::Sonifier).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SonificationReport {
    /// One intensity per tone, in Hilbert order.
    pub means: Vec<u8>,
    pub trace: PipelineTrace,
}

/// Execution trace of a single image-to-tones conversion.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub unroll: SampleStats,
    pub reduce: SampleStats,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub tone_count: usize,
    pub block_size: usize,
}

/// Summary statistics of an 8-bit sequence.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleStats {
    pub len: usize,
    pub min: u8,
    pub max: u8,
    pub mean: f64,
}

impl SampleStats {
    pub fn of(values: &[u8]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let (mut min, mut max, mut sum) = (u8::MAX, u8::MIN, 0u64);
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += u64::from(v);
        }
        Self {
            len: values.len(),
            min,
            max,
            mean: sum as f64 / values.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_small_sequence() {
        let stats = SampleStats::of(&[4, 0, 8, 4]);
        assert_eq!(
            stats,
            SampleStats {
                len: 4,
                min: 0,
                max: 8,
                mean: 4.0
            }
        );
        assert_eq!(SampleStats::of(&[]), SampleStats::default());
    }
}
