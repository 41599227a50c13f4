use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;
use unicode_width::UnicodeWidthStr;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lines of a status box, each with an optional highlight color for the part
/// after the first `:`.
pub type StatusLine = (String, Option<Color>);

/// Builds the box borders and padded rows without printing them.
fn status_box_rows(lines: &[StatusLine]) -> Vec<String> {
    let max_content_width = lines.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
    let inner = max_content_width + 2;
    let mut rows = Vec::with_capacity(lines.len() + 3);
    rows.push(format!("╔{}╗", "═".repeat(inner)));
    for (i, (line, _)) in lines.iter().enumerate() {
        let pad = max_content_width - line.width();
        rows.push(format!("║ {line}{} ║", " ".repeat(pad)));
        if i == 0 && lines.len() > 2 {
            rows.push(format!("╠{}╣", "═".repeat(inner)));
        }
    }
    rows.push(format!("╚{}╝", "═".repeat(inner)));
    rows
}

/// Prints a dynamic-width status box with optional color highlights.
pub fn print_version_status_box(lines: Vec<StatusLine>) {
    let rows = status_box_rows(&lines);
    let mut out = stdout();
    let mut content = lines.iter();
    for row in rows {
        let is_content = row.starts_with('║');
        let color = if is_content {
            content.next().and_then(|(_, c)| *c)
        } else {
            None
        };
        match (color, row.split_once(':')) {
            (Some(c), Some((pre, col))) => {
                execute!(
                    out,
                    SetForegroundColor(Color::AnsiValue(231)), // Teletext white
                    Print(format!("{pre}:")),
                    SetForegroundColor(c),
                    Print(col.trim_end_matches('║')),
                    SetForegroundColor(Color::AnsiValue(231)),
                    Print("║\n"),
                )
                .ok();
            }
            _ => {
                execute!(
                    out,
                    SetForegroundColor(Color::AnsiValue(231)),
                    Print(format!("{row}\n"))
                )
                .ok();
            }
        }
    }
    execute!(out, ResetColor).ok();
}

/// Prints the version box shown by `--version`.
pub fn print_version_info() {
    println!();
    print_version_status_box(vec![
        ("Stadium Finder".to_string(), None),
        (String::new(), None),
        (
            format!("Version: {CURRENT_VERSION}"),
            Some(Color::AnsiValue(51)), // Teletext cyan
        ),
        ("Data: TheSportsDB".to_string(), None),
    ]);
}

pub fn print_logo() {
    execute!(
        stdout(),
        SetForegroundColor(Color::AnsiValue(51)), // Teletext cyan
        Print(format!(
            "\n{}",
            r#"
░██████╗████████╗░█████╗░██████╗░██╗██╗░░░██╗███╗░░░███╗░██████╗
██╔════╝╚══██╔══╝██╔══██╗██╔══██╗██║██║░░░██║████╗░████║██╔════╝
╚█████╗░░░░██║░░░███████║██║░░██║██║██║░░░██║██╔████╔██║╚█████╗░
░╚═══██╗░░░██║░░░██╔══██║██║░░██║██║██║░░░██║██║╚██╔╝██║░╚═══██╗
██████╔╝░░░██║░░░██║░░██║██████╔╝██║╚██████╔╝██║░╚═╝░██║██████╔╝
╚═════╝░░░░╚═╝░░░╚═╝░░╚═╝╚═════╝░╚═╝░╚═════╝░╚═╝░░░░░╚═╝╚═════╝░
"#
        )),
        ResetColor
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_box_rows_are_aligned() {
        let rows = status_box_rows(&[
            ("Stadium Finder".to_string(), None),
            (String::new(), None),
            ("Version: 1.0.0".to_string(), None),
        ]);
        assert_eq!(rows.len(), 6);
        assert!(rows[1].contains("Stadium Finder"));
        assert!(rows[2].starts_with('╠'));
        let width = rows[0].width();
        assert!(rows.iter().all(|row| row.width() == width));
    }

    #[test]
    fn test_status_box_without_separator() {
        let rows = status_box_rows(&[("Only line".to_string(), None)]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], "║ Only line ║");
    }
}
