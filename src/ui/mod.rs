pub mod interactive;
pub mod render;
pub mod screens;
pub mod teletext;

pub use interactive::run_interactive_ui;
pub use render::{RenderOptions, render_detail, render_team_list, render_web_link};
pub use screens::{DetailScreen, Navigation, TeamListScreen, WebLinkScreen};
