use thiserror::Error;

/// One labeled interval from an Audacity-style label track: two timestamps in
/// seconds followed by the caption text for that span.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelInterval {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

#[derive(Error, Debug)]
pub enum LabelParseError {
    #[error("line {line}: expected `start end text`, got {content:?}")]
    MissingField { line: usize, content: String },

    #[error("line {line}: invalid timestamp {value:?}")]
    InvalidTimestamp { line: usize, value: String },
}

/// Parse a label track into intervals.
///
/// Each non-empty line carries two whitespace-separated timestamps and the
/// rest of the line as caption text (one separator character is consumed, so
/// further indentation survives). Negative or backwards ranges are passed
/// through untouched; the sweep downstream degrades them to nothing instead
/// of failing mid-track. A malformed timestamp field aborts the whole parse
/// so garbage records never reach the merge.
pub fn parse_labels(source: &str) -> Result<Vec<LabelInterval>, LabelParseError> {
    let mut intervals = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let (start_field, rest) = split_field(raw);
        let (end_field, rest) = split_field(rest);

        if start_field.is_empty() || end_field.is_empty() {
            return Err(LabelParseError::MissingField {
                line,
                content: raw.trim_end().to_string(),
            });
        }

        let start = parse_seconds(start_field, line)?;
        let end = parse_seconds(end_field, line)?;

        intervals.push(LabelInterval {
            start,
            end,
            text: strip_separator(rest).to_string(),
        });
    }

    Ok(intervals)
}

fn split_field(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(position) => (&input[..position], &input[position..]),
        None => (input, ""),
    }
}

/// Drop exactly one separator character; anything beyond it is caption text.
fn strip_separator(input: &str) -> &str {
    match input.chars().next() {
        Some(c) if c.is_whitespace() => &input[c.len_utf8()..],
        _ => input,
    }
}

fn parse_seconds(field: &str, line: usize) -> Result<f64, LabelParseError> {
    field
        .parse::<f64>()
        .map_err(|_| LabelParseError::InvalidTimestamp {
            line,
            value: field.to_string(),
        })
}
