//! Greedy word wrapping.

/// Wrap `text` into lines of at most `width` characters.
///
/// Whitespace runs collapse to single spaces. Words longer than `width` are
/// broken across lines. A `width` of 0 is treated as 1.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        if line_len > 0 && line_len + 1 + chars.len() > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }

        if line_len == 0 {
            while chars.len() > width {
                let rest = chars.split_off(width);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }
        }

        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(chars.iter());
        line_len += chars.len();
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}
