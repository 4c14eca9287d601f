//! Nord palette mapped onto the 16 ANSI colors, plus user color parsing.

use tracing::warn;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

// Polar Night
pub const NORD0: &str = "\x1b[30m"; // #2E3440
pub const NORD1: &str = "\x1b[90m"; // #3B4252
pub const NORD2: &str = "\x1b[37m"; // #434C5E
pub const NORD3: &str = "\x1b[97m"; // #4C566A

// Snow Storm
pub const NORD4: &str = "\x1b[97m"; // #D8DEE9
pub const NORD5: &str = "\x1b[37m"; // #E5E9F0
pub const NORD6: &str = "\x1b[97m"; // #ECEFF4

// Frost
pub const NORD7: &str = "\x1b[36m"; // #8FBCBB
pub const NORD8: &str = "\x1b[96m"; // #88C0D0
pub const NORD9: &str = "\x1b[34m"; // #81A1C1
pub const NORD10: &str = "\x1b[94m"; // #5E81AC

// Aurora
pub const NORD11: &str = "\x1b[91m"; // #BF616A
pub const NORD12: &str = "\x1b[93m"; // #D08770
pub const NORD13: &str = "\x1b[33m"; // #EBCB8B
pub const NORD14: &str = "\x1b[32m"; // #A3BE8C
pub const NORD15: &str = "\x1b[95m"; // #B48EAD

/// Escape code for a color name or `#rrggbb` truecolor value.
pub fn color_code(color: &str) -> Option<String> {
    if let Some(code) = ansi_color_code(color) {
        return Some(code.to_string());
    }

    // Fallback to hex color parsing for custom colors
    let hex = color.strip_prefix('#').filter(|h| h.len() == 6 && h.is_ascii())?;
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);
    Some(format!("\x1b[38;2;{};{};{}m", r, g, b))
}

/// Like [`color_code`], but logs unknown colors.
pub fn color_code_or_warn(color: &str) -> Option<String> {
    let code = color_code(color);
    if code.is_none() {
        warn!(
            color,
            "unknown color; use black, red, green, yellow, blue, magenta, cyan, white, their bright_ variants, gray, orange, purple, violet, reset, or #rrggbb"
        );
    }
    code
}

fn ansi_color_code(color_name: &str) -> Option<&'static str> {
    match color_name.to_lowercase().as_str() {
        // Standard 8 colors (30-37)
        "black" => Some("\x1b[30m"),
        "red" => Some("\x1b[31m"),
        "green" => Some("\x1b[32m"),
        "yellow" => Some("\x1b[33m"),
        "blue" => Some("\x1b[34m"),
        "magenta" => Some("\x1b[35m"),
        "cyan" => Some("\x1b[36m"),
        "white" => Some("\x1b[37m"),

        // Bright colors (90-97)
        "bright_black" | "gray" | "grey" => Some("\x1b[90m"),
        "bright_red" => Some("\x1b[91m"),
        "bright_green" => Some("\x1b[92m"),
        "bright_yellow" => Some("\x1b[93m"),
        "bright_blue" => Some("\x1b[94m"),
        "bright_magenta" => Some("\x1b[95m"),
        "bright_cyan" => Some("\x1b[96m"),
        "bright_white" => Some("\x1b[97m"),

        // Additional aliases
        "orange" => Some("\x1b[91m"),
        "purple" => Some("\x1b[35m"),
        "violet" => Some("\x1b[95m"),

        "reset" | "default" => Some(RESET),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(color_code("red").as_deref(), Some("\x1b[31m"));
        assert_eq!(color_code("Bright_Cyan").as_deref(), Some("\x1b[96m"));
        assert_eq!(color_code("grey").as_deref(), Some("\x1b[90m"));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(color_code("#88C0D0").as_deref(), Some("\x1b[38;2;136;192;208m"));
        assert_eq!(color_code("#88C0D"), None);
        assert_eq!(color_code("#GGGGGG"), None);
        assert_eq!(color_code("chartreuse"), None);
    }
}
