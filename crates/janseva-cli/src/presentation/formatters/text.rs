/// Truncate and normalize a string for single-line display
/// - Replaces newlines with spaces
/// - Collapses multiple consecutive whitespace into single space
/// - Respects UTF-8 character boundaries
pub fn truncate_for_display(s: &str, max_chars: usize) -> String {
    let normalized = s
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.chars().count() <= max_chars {
        normalized
    } else {
        let truncated: String = normalized.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
