/// Render a timestamp in seconds as the SubRip `HH:MM:SS,mmm` form.
///
/// Milliseconds are truncated, not rounded, and the hour field widens past
/// two digits instead of wrapping at 24. Callers never pass negative or
/// non-finite values.
pub fn format_timestamp(seconds: f64) -> String {
    let whole = seconds as u64;
    let millis = ((seconds - whole as f64) * 1000.0) as u64;

    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let secs = whole % 60;

    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}
