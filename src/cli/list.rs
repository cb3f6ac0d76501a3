//! List command - inventory of variable groups.

use tracing::info;

use crate::cli::output;
use crate::cli::resolve::connect;
use crate::cli::{GlobalArgs, OutputArgs};
use crate::core::catalog::Catalog;
use crate::core::report;
use crate::error::Result;

/// List the distinct variable groups of the matching projects.
pub fn execute(
    global: &GlobalArgs,
    project: Option<&str>,
    env: Option<&str>,
    json: bool,
    output: &OutputArgs,
) -> Result<()> {
    info!(project = ?project, env = ?env, "listing groups");

    let az = connect(global)?;
    let groups =
        output::with_spinner(|spinner| Catalog::new(&az, spinner).list_groups(project, env))?;

    let text = if json {
        format!("{}\n", serde_json::to_string_pretty(&groups)?)
    } else {
        report::groups_report(&groups)
    };

    output::deliver(&text, output, "groups")
}
