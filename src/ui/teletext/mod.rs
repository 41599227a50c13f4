//! Low-level teletext drawing helpers shared by every screen.

pub mod colors;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Removes control characters (ESC, BEL, newlines, ...) from text that came
/// from outside the program, so it cannot inject terminal sequences.
pub fn strip_controls(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_control()).collect()
}

/// Wraps `text` in an OSC 8 terminal hyperlink to `url`.
pub fn hyperlink(url: &str, text: &str) -> String {
    let url = strip_controls(url);
    let text = strip_controls(text);
    format!("\x1b]8;;{url}\x07{text}\x1b]8;;\x07")
}

/// Pads or truncates `text` to exactly `width` terminal columns.
///
/// Truncated text ends with `…`. Control characters are dropped.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let text = strip_controls(text);
    let text = text.as_str();
    if width == 0 {
        return String::new();
    }
    let text_width = text.width();
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }

    let mut out = String::with_capacity(width + 3);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Rotating spinner shown while the team list loads.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    frame: usize,
}

impl LoadingIndicator {
    const FRAMES: [&'static str; 4] = ["|", "/", "-", "\\"];

    pub fn current_frame(&self) -> &'static str {
        Self::FRAMES[self.frame % Self::FRAMES.len()]
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % Self::FRAMES.len();
    }
}
