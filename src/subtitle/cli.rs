use clap::{Args, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone)]
pub enum SubtitleCommands {
    /// Merge label tracks into an SRT file, combining overlapping captions
    Merge(MergeArgs),
    /// Convert a non-overlapping label track to SRT, one block per label
    Convert(ConvertArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// Label track files (`start end text` per line), concatenated in order
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Optional output path; defaults to stdout
    #[arg(short = 'o', long = "out-file", value_hint = ValueHint::FilePath)]
    pub out_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Label track file; reads stdin when omitted
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Optional output path; defaults to stdout
    #[arg(short = 'o', long = "out-file", value_hint = ValueHint::FilePath)]
    pub out_file: Option<PathBuf>,
}
