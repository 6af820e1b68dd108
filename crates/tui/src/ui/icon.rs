//! Symbolic icon names rendered as single glyphs.

/// Glyph for a symbolic icon name. Unknown names render as the name itself.
///
/// ```
/// use sheet_tui::ui::icon::icon_glyph;
///
/// assert_eq!(icon_glyph("cross"), "✕");
/// assert_eq!(icon_glyph("star"), "star");
/// ```
pub fn icon_glyph(name: &str) -> &str {
    match name {
        "cross" => "✕",
        "close" => "×",
        "clear" => "⊗",
        "success" => "✓",
        "arrow-left" => "←",
        "arrow" => "→",
        "info" => "ℹ",
        "warning" => "⚠",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icons() {
        assert_eq!(icon_glyph("close"), "×");
        assert_eq!(icon_glyph("clear"), "⊗");
        assert_eq!(icon_glyph("arrow-left"), "←");
    }

    #[test]
    fn test_unknown_icon_falls_back_to_name() {
        assert_eq!(icon_glyph("X"), "X");
        assert_eq!(icon_glyph(""), "");
    }
}
