//! Formatting rendered lines for display or copying.

/// Placeholder shown before the first conversion finished.
pub const NOT_COMPUTED: &str = "Not computed!";

/// Default font size of the HTML output, in points.
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Default line height of the HTML output, in points.
pub const DEFAULT_LINE_HEIGHT: u32 = 16;

/// How rendered lines are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per row, newline separated
    #[default]
    Text,
    /// Styled `<div>` markup that pastes into rich-text editors
    Html,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "html" => Some(OutputFormat::Html),
            _ => None,
        }
    }

    /// Format `lines` in this format.
    pub fn render<S: AsRef<str>>(&self, lines: &[S], style: &HtmlStyle) -> String {
        match self {
            OutputFormat::Text => format_text(lines),
            OutputFormat::Html => format_html(lines, style),
        }
    }
}

/// Font metrics for HTML output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlStyle {
    pub font_size: u32,
    pub line_height: u32,
}

impl Default for HtmlStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

/// Join lines with `\n`.
pub fn format_text<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Wrap lines in nowrap `<div>`s inside a sized container.
pub fn format_html<S: AsRef<str>>(lines: &[S], style: &HtmlStyle) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<div style=\"font-size:{}pt;line-height:{}pt\">",
        style.font_size, style.line_height
    ));
    for line in lines {
        out.push_str("<div style=\"text-overflow: unset; white-space: nowrap;\">");
        push_escaped(&mut out, line.as_ref());
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// The lines currently on display.
///
/// Starts with a placeholder. A finished conversion replaces the lines
/// wholesale; a failed one replaces them with its error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPanel {
    lines: Vec<String>,
}

impl Default for OutputPanel {
    fn default() -> Self {
        Self {
            lines: vec![NOT_COMPUTED.to_string()],
        }
    }
}

impl OutputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Show the outcome of a conversion.
    ///
    /// Returns true when the outcome was a success.
    pub fn show<E: std::fmt::Display>(&mut self, outcome: Result<Vec<String>, E>) -> bool {
        match outcome {
            Ok(lines) => {
                self.lines = lines;
                true
            }
            Err(e) => {
                self.lines = vec![e.to_string()];
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text_joins_lines() {
        assert_eq!(format_text(&["■□", "□■"]), "■□\n□■");
        assert_eq!(format_text::<&str>(&[]), "");
    }

    #[test]
    fn test_format_html_layout() {
        let html = format_html(&["ab"], &HtmlStyle::default());
        assert_eq!(
            html,
            "<div style=\"font-size:12pt;line-height:16pt\">\
             <div style=\"text-overflow: unset; white-space: nowrap;\">ab</div></div>"
        );
    }

    #[test]
    fn test_format_html_escapes_markup() {
        let html = format_html(&["<b>&"], &HtmlStyle::default());
        assert!(html.contains("&lt;b&gt;&amp;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_format_html_custom_style() {
        let style = HtmlStyle {
            font_size: 8,
            line_height: 9,
        };
        let html = format_html(&["x", "y"], &style);
        assert!(html.starts_with("<div style=\"font-size:8pt;line-height:9pt\">"));
        assert_eq!(html.matches("white-space: nowrap").count(), 2);
    }

    #[test]
    fn test_output_format_names() {
        for format in [OutputFormat::Text, OutputFormat::Html] {
            assert_eq!(OutputFormat::from_name(format.name()), Some(format));
        }
        assert_eq!(OutputFormat::from_name("rtf"), None);
    }

    #[test]
    fn test_panel_starts_not_computed() {
        assert_eq!(OutputPanel::new().lines(), &[NOT_COMPUTED.to_string()]);
    }

    #[test]
    fn test_panel_replaces_with_error_message() {
        let mut panel = OutputPanel::new();
        assert!(panel.show::<String>(Ok(vec!["a".into(), "b".into()])));
        assert_eq!(panel.lines().len(), 2);

        assert!(!panel.show(Err::<Vec<String>, _>("Image not loaded!")));
        assert_eq!(panel.lines(), &["Image not loaded!".to_string()]);
    }
}
