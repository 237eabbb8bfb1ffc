//! Comment and category stripping.

const COMMENT_MARKER: &str = "//";
const CATEGORY_MARKER: &str = "$CATEGORY:";
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Drop a leading byte order mark, comment lines and `$CATEGORY:` directives.
///
/// Surviving lines are kept byte-for-byte and rejoined with `\n`.
pub fn preprocess(text: &str) -> String {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    text.split('\n')
        .filter(|line| !is_directive(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_directive(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with(COMMENT_MARKER) || trimmed.starts_with(CATEGORY_MARKER)
}
