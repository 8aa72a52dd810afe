use hilbert_sonify::audio::write_wav_file;
use hilbert_sonify::config::{load_config, SonifyToolConfig};
use hilbert_sonify::diagnostics::SonificationReport;
use hilbert_sonify::image::io::{
    load_grayscale_image, load_grayscale_resized, save_grayscale_u8, write_json_file,
};
use hilbert_sonify::unroll::render_means_preview;
use hilbert_sonify::Sonifier;
use log::info;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let sonifier = Sonifier::new(config.params).map_err(|e| e.to_string())?;

    let gray = if config.resize {
        load_grayscale_resized(&config.input, config.params.dimension)?
    } else {
        load_grayscale_image(&config.input)?
    };
    info!(
        "loaded {} ({}x{})",
        config.input.display(),
        gray.width(),
        gray.height()
    );

    let report = sonifier
        .process_with_diagnostics(&gray)
        .map_err(|e| format!("Failed to sonify {}: {e}", config.input.display()))?;

    write_wav_file(
        &config.output.wav,
        config.synth,
        &report.means,
        config.params.tone_count,
    )
    .map_err(|e| format!("Failed to write {}: {e}", config.output.wav.display()))?;

    write_extras(&config, &report)?;
    print_summary(&config, &report);
    Ok(())
}

fn write_extras(config: &SonifyToolConfig, report: &SonificationReport) -> Result<(), String> {
    if let Some(path) = &config.output.json_out {
        write_json_file(path, report)?;
        println!("JSON report written to {}", path.display());
    }
    if let Some(path) = &config.output.preview_image {
        let preview = render_means_preview(&report.means, config.params.dimension)
            .map_err(|e| format!("Failed to render preview: {e}"))?;
        save_grayscale_u8(&preview, path)?;
        println!("Tone preview written to {}", path.display());
    }
    Ok(())
}

fn print_summary(config: &SonifyToolConfig, report: &SonificationReport) {
    let trace = &report.trace;
    println!("Sonification summary");
    println!("  input: {}x{}", trace.input.width, trace.input.height);
    println!(
        "  tones: {} ({} samples each)",
        trace.input.tone_count, trace.input.block_size
    );
    println!(
        "  intensity: min={} max={} mean={:.1}",
        trace.reduce.min, trace.reduce.max, trace.reduce.mean
    );
    for stage in &trace.timings.stages {
        println!("  {}: {:.3} ms", stage.label, stage.elapsed_ms);
    }
    println!("  total: {:.3} ms", trace.timings.total_ms);
    println!("Audio written to {}", config.output.wav.display());
}

fn usage() -> String {
    "Usage: hilbert-sonify <config.json>".to_string()
}
