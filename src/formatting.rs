use crate::config::DisplayConfig;

/// Box-drawing characters for table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub top_junction: String,
    pub bottom_junction: String,
    pub left_junction: String,
    pub right_junction: String,
    pub cross: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            top_junction: "┬".to_string(),
            bottom_junction: "┴".to_string(),
            left_junction: "├".to_string(),
            right_junction: "┤".to_string(),
            cross: "┼".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            top_junction: "+".to_string(),
            bottom_junction: "+".to_string(),
            left_junction: "+".to_string(),
            right_junction: "+".to_string(),
            cross: "+".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
///
/// # Returns
/// A formatted string with the header text and underline separator matching the text length
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

/// Horizontal rule of `width` characters
pub fn format_rule(width: usize, display: &DisplayConfig) -> String {
    display.box_chars.horizontal.repeat(width)
}

/// Box border line for a table whose columns have the given inner widths.
///
/// `left`, `junction` and `right` pick which characters join the segments,
/// so the same helper draws the top, middle and bottom borders.
pub fn format_border(widths: &[usize], left: &str, junction: &str, right: &str, display: &DisplayConfig) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| display.box_chars.horizontal.repeat(*w))
        .collect();
    format!("{}{}{}", left, segments.join(junction), right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig { use_unicode: true, ..Default::default() };
        let result = format_header("Test Header", false, &display);
        assert_eq!(result, "Test Header\n───────────\n");
    }

    #[test]
    fn test_format_header_double_line_unicode() {
        let display = DisplayConfig { use_unicode: true, ..Default::default() };
        let result = format_header("Test Header", true, &display);
        assert_eq!(result, "Test Header\n═══════════\n");
    }

    #[test]
    fn test_format_header_single_line_ascii() {
        let mut display = DisplayConfig { use_unicode: false, ..Default::default() };
        display.box_chars = BoxChars::ascii();
        let result = format_header("Test Header", false, &display);
        assert_eq!(result, "Test Header\n-----------\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let mut display = DisplayConfig { use_unicode: false, ..Default::default() };
        display.box_chars = BoxChars::ascii();
        let result = format_header("Test Header", true, &display);
        assert_eq!(result, "Test Header\n===========\n");
    }

    #[test]
    fn test_empty_header() {
        let display = DisplayConfig { use_unicode: true, ..Default::default() };
        let result = format_header("", false, &display);
        assert_eq!(result, "\n\n");
    }

    #[test]
    fn test_header_underline_counts_characters() {
        let display = DisplayConfig::default();
        let result = format_header("Montréal", false, &display);
        assert_eq!(result, "Montréal\n────────\n");
    }

    #[test]
    fn test_format_border_unicode() {
        let display = DisplayConfig::default();
        let chars = &display.box_chars;
        let top = format_border(&[3, 2], &chars.top_left, &chars.top_junction, &chars.top_right, &display);
        assert_eq!(top, "╭───┬──╮");
    }

    #[test]
    fn test_format_border_ascii() {
        let display = DisplayConfig { use_unicode: false, box_chars: BoxChars::ascii() };
        let chars = &display.box_chars;
        let mid = format_border(&[1, 1, 1], &chars.left_junction, &chars.cross, &chars.right_junction, &display);
        assert_eq!(mid, "+-+-+-+");
        assert_eq!(format_rule(4, &display), "----");
    }
}
