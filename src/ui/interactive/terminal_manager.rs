//! Terminal setup and cleanup for interactive mode.

use crate::error::AppError;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::{Stdout, stdout};

/// Puts the terminal into (and back out of) full-screen mode.
#[derive(Debug, Default)]
pub struct TerminalManager;

impl TerminalManager {
    pub fn new() -> Self {
        Self
    }

    /// Enables raw mode and the alternate screen, returning stdout for rendering.
    pub fn setup_terminal(&self) -> Result<Stdout, AppError> {
        let mut out = stdout();
        execute!(out, SetTitle("STADIUMS"))?;
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(out)
    }

    /// Restores the terminal to its original state.
    pub fn cleanup_terminal(&self, mut out: Stdout) -> Result<(), AppError> {
        execute!(out, Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }
}
