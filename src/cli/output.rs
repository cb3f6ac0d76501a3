//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, hints
//!
//! Reports themselves are printed verbatim so that terminal output matches
//! what `--save` writes.

use std::cell::RefCell;
use std::path::Path;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::OutputArgs;
use crate::core::progress::Progress;
use crate::core::report;
use crate::error::Result;

const SPINNER_TICK: Duration = Duration::from_millis(80);

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ saved to: results.txt`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ lib not found: Svc.DEV`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
///
/// Example: `⚠ the libs were found in different projects`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: az login`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Format a path string in cyan.
pub fn path(p: &Path) -> String {
    let shown = p.display().to_string();
    if colors_enabled() {
        style(shown).cyan().to_string()
    } else {
        shown
    }
}

/// Print a finished report without decoration.
pub fn data(text: &str) {
    print!("{}", text);
}

/// Send a finished report where the output flags ask for it.
///
/// The file, if any, is written first; the report is printed when `--out` is
/// set or nothing is saved.
///
/// # Errors
///
/// Returns error if the file cannot be written.
pub fn deliver(text: &str, output: &OutputArgs, what: &str) -> Result<()> {
    if let Some(save) = &output.save {
        report::write_report(save, text)?;
        success(&format!("{} saved to: {}", what, path(save)));
    }
    if output.prints() {
        data(text);
    }
    Ok(())
}

/// Terminal spinner shown while remote calls run.
///
/// Draws to stderr and stays hidden when stderr is not a terminal.
#[derive(Default)]
pub struct Spinner {
    current: RefCell<Option<ProgressBar>>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }
}

fn spinner_style() -> ProgressStyle {
    let frames: &[&str] = if cfg!(windows) {
        &["|", "/", "-", "\\", " "]
    } else {
        &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]
    };

    ProgressStyle::with_template("{msg} {spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(frames)
}

impl Progress for Spinner {
    fn start(&self, label: &str) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style());
        bar.set_message(label.to_string());
        bar.enable_steady_tick(SPINNER_TICK);

        if let Some(previous) = self.current.replace(Some(bar)) {
            previous.finish_and_clear();
        }
    }

    fn stop(&self) {
        if let Some(bar) = self.current.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Run `op` behind a spinner that is cleared before anything is printed.
///
/// # Errors
///
/// Returns whatever `op` returns.
pub fn with_spinner<T>(op: impl FnOnce(&Spinner) -> Result<T>) -> Result<T> {
    let spinner = Spinner::new();
    let result = op(&spinner);
    drop(spinner);
    result
}
