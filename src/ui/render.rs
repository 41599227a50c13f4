//! Builds teletext-style frames for each screen.
//!
//! Each function returns the full frame as a `String` so it can be written in
//! one go (double buffering) or inspected in tests.

use crate::constants::ui::{
    CHROME_ROWS, DEFAULT_VISIBLE_ROWS, NAME_COLUMN_WIDTH, PAGE_NUMBER, STADIUM_COLUMN_WIDTH,
};
use crate::ui::screens::{DetailScreen, TeamListScreen, WebLinkScreen};
use crate::ui::teletext::colors::{
    FOOTER_FG, HEADER_BG, LINK_FG, NOTICE_FG, RESET, SELECTED_FG, STADIUM_FG, SUBHEADER_FG,
    TEXT_FG, TITLE_BG, TITLE_FG, bg, fg,
};
use crate::ui::teletext::{fit_to_width, hyperlink, strip_controls};

/// How a frame should be drawn.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows; `None` draws every row (non-interactive output).
    pub height: Option<u16>,
    /// Print plain URLs instead of OSC 8 hyperlinks.
    pub disable_links: bool,
    /// Interactive frames start with a cursor-home/clear and use `\r\n`.
    pub interactive: bool,
}

impl RenderOptions {
    /// Options for one-shot output to a normal (cooked) terminal or pipe.
    pub fn once(disable_links: bool) -> Self {
        Self {
            width: 80,
            height: None,
            disable_links,
            interactive: false,
        }
    }

    fn newline(&self) -> &'static str {
        if self.interactive { "\r\n" } else { "\n" }
    }

    /// Rows available for list entries.
    pub fn visible_rows(&self) -> usize {
        match self.height {
            Some(h) => h.saturating_sub(CHROME_ROWS).max(1) as usize,
            None => usize::MAX,
        }
    }
}

fn link_or_text(options: &RenderOptions, url: &str, text: &str) -> String {
    if options.disable_links {
        strip_controls(text)
    } else {
        hyperlink(url, text)
    }
}

fn header(options: &RenderOptions, title: &str, right: &str) -> String {
    let right_width = (options.width as usize).saturating_sub(20);
    format!(
        "{}{}{}{}{}{:>right_width$}{RESET}",
        bg(TITLE_BG),
        fg(TITLE_FG),
        fit_to_width(title, 20),
        bg(HEADER_BG),
        fg(TEXT_FG),
        right,
    )
}

fn subheader(left: &str, right: &str, width: u16) -> String {
    let right_width = (width as usize).saturating_sub(30);
    format!(
        "{}{}{:>right_width$}{RESET}",
        fg(SUBHEADER_FG),
        fit_to_width(left, 30),
        right
    )
}

fn notice_line(message: &str) -> String {
    format!("{}{}{RESET}", fg(NOTICE_FG), strip_controls(message))
}

fn footer(text: &str) -> String {
    format!("{}{text}{RESET}", fg(FOOTER_FG))
}

fn assemble(options: &RenderOptions, lines: Vec<String>) -> String {
    let mut buffer = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum::<usize>() + 8);
    if options.interactive {
        buffer.push_str("\x1b[H\x1b[0J");
    }
    buffer.push_str(&lines.join(options.newline()));
    buffer.push_str(options.newline());
    buffer
}

/// Draws the team list, its loading state, or its empty state.
pub fn render_team_list(screen: &mut TeamListScreen, options: &RenderOptions) -> String {
    let mut lines = Vec::new();
    lines.push(header(options, "STADIUMS", &format!("FOOTBALL {PAGE_NUMBER}")));

    let rows = match options.height {
        Some(_) => options.visible_rows(),
        None => screen.teams().len().max(DEFAULT_VISIBLE_ROWS),
    };
    let range = screen.visible_range(rows);
    let position = match (screen.teams().len(), options.interactive) {
        (0, _) => String::new(),
        (count, true) => format!("{}/{count}", screen.selected_index() + 1),
        (count, false) => format!("{count} teams"),
    };
    let league = screen.league().to_uppercase();
    lines.push(subheader(&league, &position, options.width));
    lines.push(String::new());

    if screen.is_loading() {
        lines.push(format!(
            "{}{} Loading teams...{RESET}",
            fg(TEXT_FG),
            screen.indicator().current_frame()
        ));
    } else if screen.teams().is_empty() {
        lines.push(format!("{}No teams to show{RESET}", fg(TEXT_FG)));
    } else {
        let selected = screen.selected_index();
        for (index, team) in screen.teams()[range.clone()].iter().enumerate() {
            let index = range.start + index;
            let is_selected = options.interactive && index == selected;
            let marker = if is_selected { "▶" } else { " " };
            let logo = if team.logo_url().is_empty() {
                " ".to_string()
            } else {
                link_or_text(options, team.logo_url(), "◆")
            };
            let name_fg = if is_selected { SELECTED_FG } else { TEXT_FG };
            lines.push(format!(
                "{}{marker} {}{logo} {}{}{}{}{RESET}",
                fg(SELECTED_FG),
                fg(LINK_FG),
                fg(name_fg),
                fit_to_width(team.name(), NAME_COLUMN_WIDTH),
                fg(STADIUM_FG),
                fit_to_width(team.stadium(), STADIUM_COLUMN_WIDTH).trim_end(),
            ));
        }
    }

    if let Some(notification) = screen.notification() {
        lines.push(String::new());
        lines.push(notice_line(notification.message()));
    }

    if options.interactive {
        lines.push(String::new());
        lines.push(footer("↑↓=Select  Enter=Details  r=Reload  q=Quit"));
    }

    assemble(options, lines)
}

/// Draws one team's stadium and website.
pub fn render_detail(screen: &DetailScreen, options: &RenderOptions) -> String {
    let team = screen.team();
    let label = |text: &str| format!("{}{:<10}{RESET}", fg(SUBHEADER_FG), text);
    let value = |code: u8, text: &str| format!("{}{text}{RESET}", fg(code));

    let mut lines = vec![
        header(options, "STADIUMS", &format!("FOOTBALL {}", PAGE_NUMBER + 1)),
        subheader(&team.name().to_uppercase(), "", options.width),
        String::new(),
        format!("{}{}", label("Team"), value(TEXT_FG, &strip_controls(team.name()))),
        format!(
            "{}{}",
            label("Stadium"),
            value(STADIUM_FG, &strip_controls(team.stadium()))
        ),
    ];

    match screen.map_url() {
        Some(url) => {
            let coords = format!("{:.6}, {:.6}", team.latitude(), team.longitude());
            lines.push(format!("{}{}", label("Location"), value(TEXT_FG, &coords)));
            let map = if options.disable_links {
                url
            } else {
                hyperlink(&url, "Open map ▶")
            };
            lines.push(format!("{}{}", label("Map"), value(LINK_FG, &map)));
        }
        None => {
            lines.push(format!(
                "{}{}",
                label("Location"),
                value(NOTICE_FG, "Stadium location unknown")
            ));
        }
    }

    if !team.logo_url().is_empty() {
        let logo = if options.disable_links {
            strip_controls(team.logo_url())
        } else {
            hyperlink(team.logo_url(), "View logo ▶")
        };
        lines.push(format!("{}{}", label("Logo"), value(LINK_FG, &logo)));
    }

    let website = if team.web_url().trim().is_empty() {
        value(TEXT_FG, "-")
    } else {
        value(LINK_FG, &strip_controls(team.web_url()))
    };
    lines.push(format!("{}{website}", label("Website")));

    if let Some(notification) = screen.notification() {
        lines.push(String::new());
        lines.push(notice_line(notification.message()));
    }

    if options.interactive {
        lines.push(String::new());
        lines.push(footer("w=Website  Esc=Back  q=Quit"));
    }

    assemble(options, lines)
}

/// Draws the website link screen.
pub fn render_web_link(screen: &WebLinkScreen, options: &RenderOptions) -> String {
    let link = link_or_text(options, screen.url(), screen.url());
    let mut lines = vec![
        header(options, "STADIUMS", &format!("FOOTBALL {}", PAGE_NUMBER + 2)),
        subheader("OFFICIAL WEBSITE", "", options.width),
        String::new(),
        format!("{}{link}{RESET}", fg(LINK_FG)),
    ];
    if !options.disable_links {
        lines.push(String::new());
        lines.push(format!(
            "{}Ctrl/Cmd-click the link to open it in your browser{RESET}",
            fg(TEXT_FG)
        ));
    }
    if options.interactive {
        lines.push(String::new());
        lines.push(footer("Esc=Back  q=Quit"));
    }
    assemble(options, lines)
}
