use std::fs;

use anyhow::{Context, Result};
use serde_json::json;

use crate::ui::prelude::{Level, OutputFormat, emit};
use crate::ui::get_output_format;

use super::cli::MergeArgs;
use super::event::build_events;
use super::label::{LabelInterval, parse_labels};
use super::srt::render_blocks;
use super::sweep::sweep;

pub fn handle_merge(args: MergeArgs) -> Result<()> {
    let mut intervals: Vec<LabelInterval> = Vec::new();

    for path in &args.files {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read label file {}", path.display()))?;
        let labels = parse_labels(&contents)
            .with_context(|| format!("Failed to parse label file {}", path.display()))?;
        intervals.extend(labels);
    }

    let events = build_events(&intervals);
    let blocks = sweep(&events);
    let rendered = render_blocks(&blocks);

    match &args.out_file {
        Some(path) => {
            fs::write(path, rendered.as_bytes())
                .with_context(|| format!("Failed to write subtitles to {}", path.display()))?;
            emit(
                Level::Success,
                "subtitle.merge.success",
                &format!(
                    "Merged {} labels into {} subtitle blocks at {}",
                    intervals.len(),
                    blocks.len(),
                    path.display()
                ),
                None,
            );
        }
        None => match get_output_format() {
            OutputFormat::Text => print!("{rendered}"),
            OutputFormat::Json => emit(
                Level::Info,
                "subtitle.merge.result",
                &format!("Merged {} labels into {} subtitle blocks", intervals.len(), blocks.len()),
                Some(json!({ "blocks": blocks.len(), "srt": rendered })),
            ),
        },
    }

    Ok(())
}
