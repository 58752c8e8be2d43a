use super::sweep::SubtitleBlock;
use super::timestamp::format_timestamp;

/// Render blocks in the SubRip interchange layout: 1-based index line,
/// timestamp range line, one line per caption, blank separator.
pub fn render_blocks(blocks: &[SubtitleBlock]) -> String {
    let mut output = String::new();

    for (index, block) in blocks.iter().enumerate() {
        output.push_str(&format!("{}\n", index + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_timestamp(block.start),
            format_timestamp(block.end)
        ));
        for line in &block.lines {
            output.push_str(line);
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(start: f64, end: f64, lines: &[&str]) -> SubtitleBlock {
        SubtitleBlock {
            start,
            end,
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }

    #[test]
    fn renders_indexed_stanzas_with_blank_separators() {
        let rendered = render_blocks(&[
            block(0.0, 1.5, &["Hello"]),
            block(2.0, 3.0, &["One", "Two"]),
        ]);

        assert_eq!(
            rendered,
            "1\n00:00:00,000 --> 00:00:01,500\nHello\n\n\
             2\n00:00:02,000 --> 00:00:03,000\nOne\nTwo\n\n"
        );
    }

    #[test]
    fn multi_line_captions_stay_atomic() {
        let rendered = render_blocks(&[block(0.0, 1.0, &["first line\nsecond line"])]);
        assert_eq!(
            rendered,
            "1\n00:00:00,000 --> 00:00:01,000\nfirst line\nsecond line\n\n"
        );
    }

    #[test]
    fn no_blocks_render_to_nothing() {
        assert_eq!(render_blocks(&[]), "");
    }
}
