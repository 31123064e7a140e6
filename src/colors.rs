//! Terminal color gating.
//!
//! Implements the NO_COLOR standard (https://no-color.org/) and the CLICOLOR
//! conventions, falling back to TTY detection.
//!
//! **Environment Variables**:
//! - `NO_COLOR`: if set (to any value), disable colors
//! - `CLICOLOR`: if set to 0, disable colors
//! - `CLICOLOR_FORCE`: if set to non-zero, force colors even when not a TTY

use colored::control;
use std::io::IsTerminal;

/// Configure color output for the whole program. Call early in main().
pub fn init_colors() {
    let enabled = if std::env::var_os("NO_COLOR").is_some() {
        false
    } else if std::env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0") {
        true
    } else if std::env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        false
    } else {
        std::io::stdout().is_terminal()
    };

    control::set_override(enabled);
}
