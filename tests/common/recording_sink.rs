use hilbert_sonify::audio::ToneSink;
use hilbert_sonify::error::Result;

/// Sink that keeps every intensity vector it receives.
#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<(Vec<u8>, usize)>,
}

impl ToneSink for RecordingSink {
    fn write_tones(&mut self, means: &[u8], tone_count: usize) -> Result<()> {
        self.calls.push((means.to_vec(), tone_count));
        Ok(())
    }
}
