// crates/strip_debug_lines/src/lines.rs

/// Splits raw bytes into lines on `\n`, `\r\n` and a lone `\r`.
///
/// Delimiters are not retained. A trailing delimiter does not produce an
/// extra empty line, and empty input yields no lines at all.
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < content.len() {
        match content[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += if content.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Byte-level substring test. An empty needle is contained in every line.
pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Joins lines with a single `\n` and no trailing newline.
pub fn join_lines(lines: &[&[u8]]) -> Vec<u8> {
    lines.join(&b'\n')
}
