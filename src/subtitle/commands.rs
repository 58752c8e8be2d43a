use anyhow::Result;

use super::cli::SubtitleCommands;
use super::convert::handle_convert;
use super::merge::handle_merge;

pub fn handle_subtitle_command(command: SubtitleCommands) -> Result<()> {
    match command {
        SubtitleCommands::Merge(args) => handle_merge(args),
        SubtitleCommands::Convert(args) => handle_convert(args),
    }
}
