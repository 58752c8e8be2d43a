use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Subcommand, ValueHint};
use regex::Regex;

use crate::ui::prelude::{Level, emit};

#[derive(Subcommand, Debug, Clone)]
pub enum AudioCommands {
    /// Print the gain in dB that brings each measured max_volume up to 0 dBFS
    Gain {
        /// ffmpeg volumedetect log to scan
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
}

pub fn handle_audio_command(command: AudioCommands) -> Result<()> {
    match command {
        AudioCommands::Gain { file } => handle_gain(&file),
    }
}

fn handle_gain(path: &Path) -> Result<()> {
    let log = fs::read_to_string(path)
        .with_context(|| format!("Failed to read volumedetect log {}", path.display()))?;

    for gain in scan_gains(&log)? {
        emit(Level::Info, "audio.gain", &gain.to_string(), None);
    }

    Ok(())
}

/// Collect every `max_volume: <n> dB` reading, negated: a peak of -5.2 dB
/// needs +5.2 dB of gain to hit full scale.
fn scan_gains(log: &str) -> Result<Vec<f64>> {
    let pattern = Regex::new(r"max_volume:\s*(-?[0-9]+(?:\.[0-9]+)?)")
        .context("compiling max_volume pattern")?;

    Ok(pattern
        .captures_iter(log)
        .filter_map(|captures| captures[1].parse::<f64>().ok())
        .map(|volume| -volume)
        .collect())
}
