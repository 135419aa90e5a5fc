//! Single-line previews of slot text for the viewer table and log lines.

/// Preview length used by the viewer table.
pub const TABLE_PREVIEW_CHARS: usize = 50;

/// Preview length used in console status lines.
pub const CONSOLE_PREVIEW_CHARS: usize = 20;

pub const ELLIPSIS: &str = "...";

pub const EMPTY_PLACEHOLDER: &str = "<empty>";

/// Collapses every line break (`\r\n`, `\n`, `\r`) into a single space.
pub fn collapse_lines(text: &str) -> String {
    text.replace("\r\n", " ").replace(&['\r', '\n'][..], " ")
}

/// Collapses line breaks, then truncates to `max_chars` characters followed
/// by [`ELLIPSIS`] when the text is longer.
pub fn preview_line(text: &str, max_chars: usize) -> String {
    let collapsed = collapse_lines(text);
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut preview: String = collapsed.chars().take(max_chars).collect();
    preview.push_str(ELLIPSIS);
    preview
}

/// Preview of a slot, with [`EMPTY_PLACEHOLDER`] for empty slots.
pub fn slot_preview(content: Option<&str>, max_chars: usize) -> String {
    match content {
        Some(text) if !text.is_empty() => preview_line(text, max_chars),
        _ => EMPTY_PLACEHOLDER.to_string(),
    }
}
