use std::io::IsTerminal;
use std::sync::OnceLock;

use chrono::Local;
use dialoguer::console::{Term, style};

use crate::cli::GlobalFlags;

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub quiet: bool,
    pub interactive: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs {
        quiet: flags.quiet,
        interactive: std::io::stdout().is_terminal(),
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        quiet: false,
        interactive: false,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Success,
    Info,
    Warning,
    Error,
}

pub fn success(message: &str) {
    emit(Level::Success, message);
}

pub fn info(message: &str) {
    emit(Level::Info, message);
}

pub fn warn(message: &str) {
    emit(Level::Warning, message);
}

pub fn error(message: &str) {
    emit(Level::Error, message);
}

fn emit(level: Level, message: &str) {
    if prefs().quiet && matches!(level, Level::Success | Level::Info) {
        return;
    }

    let timestamp = style(format!("[{}]", Local::now().format("%H:%M:%S"))).dim();
    let symbol = match level {
        Level::Success => style("✅").green(),
        Level::Info => style("ℹ️ ").blue(),
        Level::Warning => style("⚠️ ").yellow(),
        Level::Error => style("❌").red(),
    };

    println!("{timestamp} {symbol} {}", style(message).white());
}

/// Clear the screen (on a terminal) and print the title.
pub fn banner() {
    if prefs().interactive {
        let _ = Term::stdout().clear_screen();
    }
    println!("\n{}\n", style("🛠️  DISCOBASE MANAGER").green().bold());
}
