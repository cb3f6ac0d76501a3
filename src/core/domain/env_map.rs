//! EnvMap type.
//!
//! A resolved name -> display string mapping for exactly one variable group,
//! serializable as a shell-safe .env document.

#[cfg(unix)]
use std::io::Write;
use std::path::Path;

use crate::core::constants::{SHELL_SPECIAL_CHARS, SINGLE_QUOTE_ESCAPE};
use crate::core::domain::VariableGroup;
use crate::core::types::VariableName;
use crate::error::Result;

/// Ordered variable name -> display string mapping.
///
/// Iteration follows the order of the source group; nothing here sorts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    entries: Vec<(VariableName, String)>,
}

impl EnvMap {
    /// Flatten a group, substituting the secret sentinel for withheld values.
    pub fn from_group(group: &VariableGroup) -> Self {
        let mut map = Self::default();
        for (name, record) in group.variables() {
            map.insert(name.clone(), record.display().to_string());
        }
        map
    }

    /// Create from raw key-value pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut map = Self::default();
        for (k, v) in pairs {
            map.insert(k, v);
        }
        map
    }

    /// Insert or replace, keeping the position of the first insertion.
    fn insert(&mut self, key: VariableName, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// All entries as key-value pairs
    pub fn entries(&self) -> &[(VariableName, String)] {
        &self.entries
    }

    /// Serialize to .env text: one `name=value` line per entry, trailing
    /// newline included.
    pub fn to_env_string(&self) -> String {
        let mut output = String::new();
        for (key, value) in &self.entries {
            output.push_str(key);
            output.push('=');
            output.push_str(&quote_if_needed(value));
            output.push('\n');
        }
        output
    }

    /// Write the .env text to `path`, readable by the owner only on Unix.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_env_string();

        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;

            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(path, content)?;
        }

        Ok(())
    }
}

impl std::fmt::Display for EnvMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_env_string())
    }
}

/// Single-quote `value` when it holds a shell-special character.
///
/// Embedded `'` become `'"'"'`, so the shell reassembles the original string.
pub fn quote_if_needed(value: &str) -> String {
    if value.contains(SHELL_SPECIAL_CHARS) {
        format!("'{}'", value.replace('\'', SINGLE_QUOTE_ESCAPE))
    } else {
        value.to_string()
    }
}
