//! Teletext palette as 256-colour ANSI indices.

pub const HEADER_BG: u8 = 21; // Bright blue
pub const TITLE_BG: u8 = 46; // Bright green
pub const TITLE_FG: u8 = 21;
pub const SUBHEADER_FG: u8 = 46;
pub const TEXT_FG: u8 = 231; // Pure white
pub const STADIUM_FG: u8 = 51; // Bright cyan
pub const SELECTED_FG: u8 = 226; // Bright yellow
pub const LINK_FG: u8 = 201; // Bright magenta
pub const NOTICE_FG: u8 = 196; // Red
pub const FOOTER_FG: u8 = 21;

/// Foreground escape for a palette index.
pub fn fg(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// Background escape for a palette index.
pub fn bg(code: u8) -> String {
    format!("\x1b[48;5;{code}m")
}

pub const RESET: &str = "\x1b[0m";
