use super::params::SonifyParams;
use crate::audio::ToneSink;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    InputDescriptor, PipelineTrace, SampleStats, SonificationReport, TimingBreakdown,
};
use crate::error::{Result, SonifyError};
use crate::image::ImageView;
use crate::reduce::block_means;
use crate::unroll::unroll;
use log::{debug, info};
use std::time::Instant;

/// Converts square grayscale grids into tone intensity vectors.
///
/// Parameters are validated once in [`Sonifier::new`]; each call to
/// [`Sonifier::process`] is a pure function of the input grid.
#[derive(Clone, Debug)]
pub struct Sonifier {
    params: SonifyParams,
    block_size: usize,
}

impl Sonifier {
    pub fn new(params: SonifyParams) -> Result<Self> {
        let block_size = params.validate()?;
        Ok(Self { params, block_size })
    }

    pub fn params(&self) -> SonifyParams {
        self.params
    }

    /// Samples averaged into each tone.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Unroll `image` along the Hilbert curve and reduce it to
    /// `tone_count` intensities.
    pub fn process<I>(&self, image: &I) -> Result<Vec<u8>>
    where
        I: ImageView<Pixel = u8>,
    {
        self.check_input(image)?;
        let sequence = unroll(image)?;
        block_means(&sequence, self.params.tone_count)
    }

    /// Same as [`process`](Self::process), also recording stage timings and
    /// statistics.
    pub fn process_with_diagnostics<I>(&self, image: &I) -> Result<SonificationReport>
    where
        I: ImageView<Pixel = u8>,
    {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        self.check_input(image)?;
        let sequence = timings.time("unroll", || unroll(image))?;
        let means = timings.time("reduce", || block_means(&sequence, self.params.tone_count))?;
        timings.total_ms = elapsed_ms(total_start);

        let trace = PipelineTrace {
            input: InputDescriptor {
                width: image.width(),
                height: image.height(),
                tone_count: self.params.tone_count,
                block_size: self.block_size,
            },
            timings,
            unroll: SampleStats::of(&sequence),
            reduce: SampleStats::of(&means),
        };
        info!(
            "sonified {}x{} grid into {} tones in {:.3} ms",
            trace.input.width, trace.input.height, trace.input.tone_count, trace.timings.total_ms
        );
        Ok(SonificationReport { means, trace })
    }

    /// Process `image` and hand the intensities to `sink`.
    pub fn sonify_into<I, S>(&self, image: &I, sink: &mut S) -> Result<Vec<u8>>
    where
        I: ImageView<Pixel = u8>,
        S: ToneSink + ?Sized,
    {
        let means = self.process(image)?;
        sink.write_tones(&means, self.params.tone_count)?;
        Ok(means)
    }

    fn check_input<I: ImageView<Pixel = u8>>(&self, image: &I) -> Result<()> {
        let n = image.square_dimension()?;
        if n != self.params.dimension {
            return Err(SonifyError::DimensionMismatch {
                expected: self.params.dimension,
                actual: n,
            });
        }
        debug!(
            "input {n}x{n}, {} tones of {} samples",
            self.params.tone_count, self.block_size
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{GrayImageU8, ImageU8};

    #[test]
    fn rejects_invalid_params_up_front() {
        assert!(matches!(
            Sonifier::new(SonifyParams::new(12, 4)),
            Err(SonifyError::UnsupportedDimension(12))
        ));
        assert!(matches!(
            Sonifier::new(SonifyParams::new(4, 0)),
            Err(SonifyError::ZeroToneCount)
        ));
        assert!(matches!(
            Sonifier::new(SonifyParams::new(4, 5)),
            Err(SonifyError::IndivisibleToneCount { tone_count: 5, samples: 16 })
        ));
    }

    #[test]
    fn rejects_grid_of_other_size() {
        let sonifier = Sonifier::new(SonifyParams::new(8, 4)).unwrap();
        let grid = GrayImageU8::from_fn(4, 4, |_, _| 0);
        assert!(matches!(
            sonifier.process(&grid),
            Err(SonifyError::DimensionMismatch { expected: 8, actual: 4 })
        ));
    }

    #[test]
    fn two_by_two_pairs() {
        // Hilbert order of [[20, 30], [10, 40]] is 10, 20, 30, 40
        let data = [20u8, 30, 10, 40];
        let sonifier = Sonifier::new(SonifyParams::new(2, 2)).unwrap();
        let means = sonifier.process(&ImageU8::packed(2, 2, &data)).unwrap();
        assert_eq!(means, vec![15, 35]);
    }

    #[test]
    fn diagnostics_match_plain_run() {
        let grid = GrayImageU8::from_fn(16, 16, |row, col| (row * col) as u8);
        let sonifier = Sonifier::new(SonifyParams::new(16, 8)).unwrap();
        let plain = sonifier.process(&grid).unwrap();
        let report = sonifier.process_with_diagnostics(&grid).unwrap();

        assert_eq!(report.means, plain);
        assert_eq!(report.trace.input.block_size, 32);
        assert_eq!(report.trace.unroll.len, 256);
        assert_eq!(report.trace.reduce.len, 8);
        assert!(report.trace.timings.stage("unroll").is_some());
        assert!(report.trace.timings.stage("reduce").is_some());
    }
}
