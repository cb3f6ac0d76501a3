//! Text reports.
//!
//! The same text is printed to the terminal and written by `--save`, so each
//! report is built as a single string.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use crate::core::constants::RULE_WIDTH;
use crate::core::domain::{DiffEntry, GroupDiff, GroupSummary, SearchResult};
use crate::error::Result;

/// Closing rule of a comparison report.
const COMPARISON_RULE: &str = "------------------";

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Render search results as labeled blocks.
pub fn search_report(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "Nenhum resultado encontrado.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Resultados");
    let _ = writeln!(out, "{}", rule('='));
    for r in results {
        let _ = writeln!(out, "Projeto: {}", r.project);
        let _ = writeln!(out, "Grupo:   {}", r.group);
        let _ = writeln!(out, "Chave:   {}", r.variable);
        let _ = writeln!(out, "Valor:   {}", r.value.as_deref().unwrap_or_default());
        let _ = writeln!(out, "Criado:  {}", r.created_by);
        let _ = writeln!(out, "Modif.:  {}", r.modified_by);
        let _ = writeln!(out, "{}", rule('-'));
    }
    out
}

/// Render a group inventory as labeled blocks between rules.
pub fn groups_report(groups: &[GroupSummary]) -> String {
    if groups.is_empty() {
        return "Nenhum grupo encontrado.\n".to_string();
    }

    let mut out = String::new();
    for g in groups {
        let _ = writeln!(out, "{}", rule('-'));
        let _ = writeln!(out, "Projeto: {}", g.project);
        let _ = writeln!(out, "Grupo:   {}", g.group);
        let _ = writeln!(out, "Criado:  {}", g.created_by);
        let _ = writeln!(out, "Modif.:  {}", g.modified_by);
    }
    let _ = writeln!(out, "{}", rule('-'));
    out
}

/// Render the exclusive keys of each side of a comparison.
pub fn comparison_report(diff: &GroupDiff) -> String {
    let mut out = String::new();
    side_section(&mut out, diff.left_label(), diff.right_label(), diff.only_left());
    side_section(&mut out, diff.right_label(), diff.left_label(), diff.only_right());
    let _ = writeln!(out, "{}", COMPARISON_RULE);
    out
}

fn side_section(out: &mut String, label: &str, other: &str, entries: &[DiffEntry]) {
    let _ = writeln!(out, "------ {} -------", label);
    if entries.is_empty() {
        let _ = writeln!(out, "(Sem variáveis exclusivas em {})", label);
        return;
    }
    for entry in entries {
        let _ = writeln!(
            out,
            "+ {}={} (Existe em {} mas não existe em {})",
            entry.key(),
            entry.value(),
            label,
            other
        );
    }
}

/// Write a finished report to `path`.
///
/// # Errors
///
/// Returns error if the file cannot be written.
pub fn write_report(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), bytes = content.len(), "writing report");
    std::fs::write(path, content)?;
    Ok(())
}
