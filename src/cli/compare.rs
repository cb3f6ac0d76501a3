//! Compare command - variables exclusive to each of two groups.

use tracing::info;

use crate::cli::output;
use crate::cli::resolve::connect;
use crate::cli::{GlobalArgs, OutputArgs};
use crate::core::catalog::Catalog;
use crate::core::report;
use crate::error::Result;

/// Compare two groups by key set.
pub fn execute(
    global: &GlobalArgs,
    project: Option<&str>,
    libs: &[String],
    env: Option<&str>,
    output: &OutputArgs,
) -> Result<()> {
    info!(project = ?project, libs = ?libs, env = ?env, "comparing groups");

    let az = connect(global)?;
    let comparison =
        output::with_spinner(|spinner| Catalog::new(&az, spinner).compare(project, libs, env))?;

    if let Some(msg) = comparison.warning() {
        output::warn(&msg);
    }

    let text = report::comparison_report(&comparison.diff());
    output::deliver(&text, output, "comparison")
}
