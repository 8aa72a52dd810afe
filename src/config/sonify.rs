use crate::audio::SynthOptions;
use crate::sonifier::SonifyParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SonifyToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Resample the decoded image to `params.dimension²` before unrolling.
    #[serde(default)]
    pub resize: bool,
    #[serde(default)]
    pub params: SonifyParams,
    #[serde(default)]
    pub synth: SynthOptions,
    pub output: SonifyOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SonifyOutputConfig {
    pub wav: PathBuf,
    #[serde(default)]
    pub json_out: Option<PathBuf>,
    /// PNG showing the image region behind each tone.
    #[serde(default)]
    pub preview_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<SonifyToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<SonifyToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}
