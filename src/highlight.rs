//! Terminal highlighting for console output
//!
//! Formatting code never emits escape sequences itself. It asks a
//! [`Highlighter`] to paint a token (by semantic class) or a whole console
//! line (by severity), so colorization can be turned off or swapped without
//! touching the renderer.

use colored::Color;

use crate::config::ColorMode;
use crate::level::Severity;

const RESET: &str = "\x1b[0m";

/// Semantic class of a token inside a structured record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Object key, including its quotes
    Key,
    String,
    Number,
    Boolean,
    Null,
}

pub trait Highlighter: Send + Sync {
    fn token(&self, class: TokenClass, text: &str) -> String;
    fn level(&self, level: Severity, text: &str) -> String;
}

/// Leaves text untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn token(&self, _class: TokenClass, text: &str) -> String {
        text.to_string()
    }

    fn level(&self, _level: Severity, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI foreground colors
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiHighlighter;

impl AnsiHighlighter {
    pub fn token_color(class: TokenClass) -> Color {
        match class {
            TokenClass::Key => Color::Cyan,
            TokenClass::String => Color::Green,
            TokenClass::Number => Color::Yellow,
            TokenClass::Boolean => Color::Magenta,
            TokenClass::Null => Color::BrightBlack,
        }
    }

    pub fn level_color(level: Severity) -> Color {
        match level {
            Severity::Error => Color::Red,
            Severity::Warn => Color::Yellow,
            Severity::Info => Color::Blue,
            Severity::Debug => Color::BrightBlack,
        }
    }

    fn paint(color: Color, text: &str) -> String {
        format!("\x1b[{}m{}{}", color.to_fg_str(), text, RESET)
    }

    /// Paint `text` so that `color` stays active after every reset inside it
    fn wrap(color: Color, text: &str) -> String {
        let open = format!("\x1b[{}m", color.to_fg_str());
        let reopened = text.replace(RESET, &format!("{}{}", RESET, open));
        format!("{}{}{}", open, reopened, RESET)
    }
}

impl Highlighter for AnsiHighlighter {
    fn token(&self, class: TokenClass, text: &str) -> String {
        Self::paint(Self::token_color(class), text)
    }

    fn level(&self, level: Severity, text: &str) -> String {
        Self::wrap(Self::level_color(level), text)
    }
}

/// Pick the highlighter for a color mode.
///
/// `Auto` defers to the `colored` crate's environment detection
/// (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`).
pub fn for_mode(mode: ColorMode) -> Box<dyn Highlighter> {
    let colorize = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
    };

    if colorize {
        Box::new(AnsiHighlighter)
    } else {
        Box::new(PlainHighlighter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_is_identity() {
        let h = PlainHighlighter;
        assert_eq!(h.token(TokenClass::Key, "\"a\":"), "\"a\":");
        assert_eq!(h.level(Severity::Error, "boom"), "boom");
    }

    #[test]
    fn test_level_colors() {
        let h = AnsiHighlighter;
        assert_eq!(h.level(Severity::Error, "x"), "\x1b[31mx\x1b[0m");
        assert_eq!(h.level(Severity::Warn, "x"), "\x1b[33mx\x1b[0m");
        assert_eq!(h.level(Severity::Info, "x"), "\x1b[34mx\x1b[0m");
        assert_eq!(h.level(Severity::Debug, "x"), "\x1b[90mx\x1b[0m");
    }

    #[test]
    fn test_token_colors() {
        let h = AnsiHighlighter;
        assert_eq!(h.token(TokenClass::Key, "\"k\""), "\x1b[36m\"k\"\x1b[0m");
        assert_eq!(h.token(TokenClass::String, "\"v\""), "\x1b[32m\"v\"\x1b[0m");
        assert_eq!(h.token(TokenClass::Number, "1"), "\x1b[33m1\x1b[0m");
        assert_eq!(h.token(TokenClass::Boolean, "true"), "\x1b[35mtrue\x1b[0m");
        assert_eq!(h.token(TokenClass::Null, "null"), "\x1b[90mnull\x1b[0m");
    }

    #[test]
    fn test_level_color_survives_inner_tokens() {
        let h = AnsiHighlighter;
        let inner = format!("{{{}: {}}}", h.token(TokenClass::Key, "\"id\""), h.token(TokenClass::Number, "1"));
        let out = h.level(Severity::Error, &inner);
        assert_eq!(
            out,
            "\x1b[31m{\x1b[36m\"id\"\x1b[0m\x1b[31m: \x1b[33m1\x1b[0m\x1b[31m}\x1b[0m"
        );
    }

    #[test]
    fn test_never_mode_is_plain() {
        let h = for_mode(ColorMode::Never);
        assert_eq!(h.level(Severity::Info, "x"), "x");
    }

    #[test]
    fn test_always_mode_colors() {
        let h = for_mode(ColorMode::Always);
        assert!(h.level(Severity::Info, "x").contains("\x1b[34m"));
    }
}
