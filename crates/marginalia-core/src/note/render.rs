use super::parse::HIGHLIGHT_HEADER;
use super::Highlight;

/// Render highlights as a draft body
///
/// Section numbers are the 1-based position in `highlights`. Highlights with a
/// blank quote are skipped even when they carry commentary, so numbering can
/// have gaps. Every quote line gets its own `> ` marker.
pub fn render_body(highlights: &[Highlight]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (i, highlight) in highlights.iter().enumerate() {
        let quote = highlight.quote.trim();
        if quote.is_empty() {
            continue;
        }

        lines.push(format!("{} {}", HIGHLIGHT_HEADER, i + 1));
        for line in quote.lines() {
            if line.trim().is_empty() {
                lines.push(">".to_string());
            } else {
                lines.push(format!("> {}", line));
            }
        }
        lines.push(String::new());

        let commentary = highlight.commentary.trim();
        if !commentary.is_empty() {
            lines.push(commentary.to_string());
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
