pub mod articles;
pub mod auth;
pub mod editorial_numbers;
pub mod languages;
pub mod researchers;
pub mod settings;
pub mod thematic_lines;
pub mod users;

/// Trim, collapse runs of whitespace into one space and drop control characters.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitize every line, strip blank edges and keep at most one blank line in a row.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    let mut previous_empty = true;

    for line in input.lines().map(sanitize_inline_text) {
        if line.is_empty() {
            if !previous_empty {
                result.push(String::new());
            }
            previous_empty = true;
        } else {
            result.push(line);
            previous_empty = false;
        }
    }

    while matches!(result.last(), Some(line) if line.is_empty()) {
        result.pop();
    }

    result.join("\n")
}

/// Sanitized optional text, `None` when nothing is left.
pub(crate) fn optional_inline(value: Option<&str>) -> Option<String> {
    value.map(sanitize_inline_text).filter(|value| !value.is_empty())
}
