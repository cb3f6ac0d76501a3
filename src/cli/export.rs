//! Export command - write one variable group as .env.

use tracing::info;

use crate::cli::output;
use crate::cli::resolve::connect;
use crate::cli::{GlobalArgs, OutputArgs};
use crate::core::catalog::Catalog;
use crate::error::Result;

/// Export the variables of a group; secrets appear as `***SECRET***`.
pub fn execute(
    global: &GlobalArgs,
    project: &str,
    lib: &str,
    env: Option<&str>,
    output: &OutputArgs,
) -> Result<()> {
    info!(project, lib, env = ?env, "exporting group");

    let az = connect(global)?;
    let exported =
        output::with_spinner(|spinner| Catalog::new(&az, spinner).export(Some(project), lib, env))?;

    if let Some(path) = &output.save {
        exported.env.save(path)?;
        output::success(&format!(
            ".env of '{}' saved to: {}",
            exported.group,
            output::path(path)
        ));
    }
    if output.prints() {
        output::data(&format!("# {}\n{}", exported.group, exported.env));
    }

    Ok(())
}
