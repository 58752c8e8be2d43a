use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use serde_json::json;

use crate::ui::prelude::{Level, OutputFormat, emit};
use crate::ui::get_output_format;

use super::cli::ConvertArgs;
use super::label::parse_labels;
use super::srt::render_blocks;
use super::sweep::SubtitleBlock;

/// The 1:1 converter for tracks that are already non-overlapping: every label
/// becomes its own block with its range untouched. No sweep, no boundary
/// adjustment.
pub fn handle_convert(args: ConvertArgs) -> Result<()> {
    let contents = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read label file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read label data from stdin")?;
            buffer
        }
    };

    let labels = parse_labels(&contents).context("Failed to parse label input")?;
    let blocks: Vec<SubtitleBlock> = labels
        .into_iter()
        .map(|label| SubtitleBlock {
            start: label.start,
            end: label.end,
            lines: vec![label.text],
        })
        .collect();
    let rendered = render_blocks(&blocks);

    match &args.out_file {
        Some(path) => {
            fs::write(path, rendered.as_bytes())
                .with_context(|| format!("Failed to write subtitles to {}", path.display()))?;
            emit(
                Level::Success,
                "subtitle.convert.success",
                &format!("Converted {} labels at {}", blocks.len(), path.display()),
                None,
            );
        }
        None => match get_output_format() {
            OutputFormat::Text => print!("{rendered}"),
            OutputFormat::Json => emit(
                Level::Info,
                "subtitle.convert.result",
                &format!("Converted {} labels", blocks.len()),
                Some(json!({ "blocks": blocks.len(), "srt": rendered })),
            ),
        },
    }

    Ok(())
}
