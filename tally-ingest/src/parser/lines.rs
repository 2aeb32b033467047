//! Split extracted text into candidate lines.

/// Trimmed, non-empty lines of `text`, in order.
///
/// Splits on `\n`; a trailing `\r` or page-break form feed is removed by the trim.
pub fn normalized_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty())
}
