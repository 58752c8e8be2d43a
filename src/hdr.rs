use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::{Deserialize, Serialize};

use crate::common::paths;
use crate::ui::prelude::{Level, emit};

/// Quantization steps from SMPTE ST 2086: chromaticity coordinates are
/// expressed in 0.00002 units, luminance in 0.0001 cd/m².
const CHROMATICITY_STEP: f64 = 0.00002;
const LUMINANCE_STEP: f64 = 0.0001;

#[derive(Subcommand, Debug, Clone)]
pub enum HdrCommands {
    /// Print an x265 master-display parameter string for the configured display
    MasterDisplay(MasterDisplayArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MasterDisplayArgs {
    /// Red primary as `x,y` chromaticity coordinates
    #[arg(long, value_parser = parse_pair)]
    pub red: Option<(f64, f64)>,

    /// Green primary as `x,y` chromaticity coordinates
    #[arg(long, value_parser = parse_pair)]
    pub green: Option<(f64, f64)>,

    /// Blue primary as `x,y` chromaticity coordinates
    #[arg(long, value_parser = parse_pair)]
    pub blue: Option<(f64, f64)>,

    /// White point as `x,y` chromaticity coordinates
    #[arg(long, value_parser = parse_pair)]
    pub white_point: Option<(f64, f64)>,

    /// Display luminance as `max,min` in cd/m²
    #[arg(long, value_parser = parse_pair)]
    pub luminance: Option<(f64, f64)>,

    /// Persist the effective values to the display config file
    #[arg(long)]
    pub save: bool,
}

/// Measured display characteristics, as reported by dxdiag or a colorimeter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DisplayMeasurements {
    pub red: (f64, f64),
    pub green: (f64, f64),
    pub blue: (f64, f64),
    pub white_point: (f64, f64),
    pub luminance: (f64, f64),
}

impl Default for DisplayMeasurements {
    fn default() -> Self {
        Self {
            red: (0.651367, 0.332031),
            green: (0.306641, 0.630859),
            blue: (0.150391, 0.059570),
            white_point: (0.313477, 0.329102),
            luminance: (1499.0, 0.01),
        }
    }
}

impl DisplayMeasurements {
    /// Load measurements from the config file, falling back to the built-in
    /// set when no file exists yet.
    pub fn load() -> Result<Self> {
        let path = config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading display config {}", path.display()))?;
        toml::from_str(&content).context("parsing display config")
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = config_file_path()?;
        let content = toml::to_string_pretty(self).context("serializing display config")?;
        fs::write(&path, content)
            .with_context(|| format!("writing display config {}", path.display()))?;
        Ok(path)
    }

    /// Render the x265 `master-display` parameter string, fields in the
    /// G/B/R/WP/L order the encoder expects.
    pub fn master_display_string(&self) -> String {
        format!(
            "G({},{})B({},{})R({},{})WP({},{})L({},{})",
            quantize(self.green.0, CHROMATICITY_STEP),
            quantize(self.green.1, CHROMATICITY_STEP),
            quantize(self.blue.0, CHROMATICITY_STEP),
            quantize(self.blue.1, CHROMATICITY_STEP),
            quantize(self.red.0, CHROMATICITY_STEP),
            quantize(self.red.1, CHROMATICITY_STEP),
            quantize(self.white_point.0, CHROMATICITY_STEP),
            quantize(self.white_point.1, CHROMATICITY_STEP),
            quantize(self.luminance.0, LUMINANCE_STEP),
            quantize(self.luminance.1, LUMINANCE_STEP),
        )
    }
}

fn quantize(value: f64, step: f64) -> u32 {
    (value / step).round() as u32
}

fn config_file_path() -> Result<PathBuf> {
    Ok(paths::vod_config_dir()?.join("display.toml"))
}

fn parse_pair(raw: &str) -> Result<(f64, f64), String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{raw}`"))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid coordinate `{}`", x.trim()))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid coordinate `{}`", y.trim()))?;
    Ok((x, y))
}

pub fn handle_hdr_command(command: HdrCommands) -> Result<()> {
    match command {
        HdrCommands::MasterDisplay(args) => handle_master_display(args),
    }
}

fn handle_master_display(args: MasterDisplayArgs) -> Result<()> {
    let mut display = DisplayMeasurements::load()?;

    if let Some(red) = args.red {
        display.red = red;
    }
    if let Some(green) = args.green {
        display.green = green;
    }
    if let Some(blue) = args.blue {
        display.blue = blue;
    }
    if let Some(white_point) = args.white_point {
        display.white_point = white_point;
    }
    if let Some(luminance) = args.luminance {
        display.luminance = luminance;
    }

    if args.save {
        let path = display.save()?;
        emit(
            Level::Success,
            "hdr.master_display.saved",
            &format!("Saved display measurements to {}", path.display()),
            None,
        );
    }

    emit(
        Level::Info,
        "hdr.master_display",
        &display.master_display_string(),
        None,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DisplayMeasurements {
        DisplayMeasurements {
            red: (0.68, 0.32),
            green: (0.265, 0.69),
            blue: (0.15, 0.06),
            white_point: (0.3127, 0.329),
            luminance: (1000.0, 0.005),
        }
    }

    #[test]
    fn quantizes_chromaticities_and_luminance() {
        assert_eq!(quantize(0.68, CHROMATICITY_STEP), 34_000);
        assert_eq!(quantize(0.3127, CHROMATICITY_STEP), 15_635);
        assert_eq!(quantize(1000.0, LUMINANCE_STEP), 10_000_000);
        assert_eq!(quantize(0.005, LUMINANCE_STEP), 50);
    }

    #[test]
    fn renders_fields_in_encoder_order() {
        assert_eq!(
            sample().master_display_string(),
            "G(13250,34500)B(7500,3000)R(34000,16000)WP(15635,16450)L(10000000,50)"
        );
    }

    #[test]
    fn measurements_round_trip_through_toml() {
        let serialized = toml::to_string_pretty(&sample()).unwrap();
        let restored: DisplayMeasurements = toml::from_str(&serialized).unwrap();
        assert_eq!(restored, sample());
    }

    #[test]
    fn pair_parser_accepts_spaced_input() {
        assert_eq!(parse_pair("0.68, 0.32").unwrap(), (0.68, 0.32));
        assert!(parse_pair("0.68").is_err());
        assert!(parse_pair("a,b").is_err());
    }
}
