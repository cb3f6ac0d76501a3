//! Constants used throughout capi.
//!
//! Centralizes magic strings and report layout values.

/// Rendered in place of a variable value the service withholds.
pub const SECRET_SENTINEL: &str = "***SECRET***";

/// Rendered in place of a missing identity field.
pub const UNKNOWN_IDENTITY: &str = "Desconhecido";

/// Width of the `-` and `=` rules in text reports.
pub const RULE_WIDTH: usize = 80;

/// Characters that force single-quoting of a value in .env output.
pub const SHELL_SPECIAL_CHARS: &[char] = &[' ', '#', '"', '\'', '=', '$'];

/// Replacement for an embedded `'` inside a single-quoted .env value.
///
/// Closes the quote, emits a double-quoted `'`, and reopens.
pub const SINGLE_QUOTE_ESCAPE: &str = "'\"'\"'";

/// Project-local configuration file name.
pub const CONFIG_FILE: &str = ".capi.toml";

/// Directory under the platform config dir holding the global config.
pub const CONFIG_DIR: &str = "capi";

/// Global configuration file name inside [`CONFIG_DIR`].
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Executable name of the Azure CLI.
pub const AZ_BINARY: &str = "az";
