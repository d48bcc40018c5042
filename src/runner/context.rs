//! Execution context for a mapdn invocation
//!
//! The context carries what diagnostics need: the verbosity level and where
//! the settings came from.

use colored::Colorize;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Execution context shared by the steps of one invocation
#[derive(Debug, Clone)]
pub struct Context {
    /// Settings file path, if one was loaded
    pub config_path: Option<PathBuf>,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet = 0,
    Normal = 1,
    Verbose = 2,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            config_path: None,
            verbosity: Verbosity::Normal,
        }
    }

    /// Set the settings file path
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Whether debug messages are shown
    pub fn is_verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }

    /// Print error message (shown at every verbosity)
    pub fn print_error(&self, message: &str) {
        disable_color_unless_terminal();
        eprintln!("{} {}", "ERROR:".red().bold(), message);
    }

    /// Print warning message (suppressed in quiet mode)
    pub fn print_warning(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            disable_color_unless_terminal();
            eprintln!("{} {}", "WARNING:".yellow().bold(), message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.is_verbose() {
            eprintln!("[DEBUG] {}", message);
        }
    }
}

fn disable_color_unless_terminal() {
    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
