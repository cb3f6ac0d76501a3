//! Search command - find variables whose value contains a term.

use tracing::info;

use crate::cli::output;
use crate::cli::resolve::connect;
use crate::cli::{GlobalArgs, OutputArgs};
use crate::core::catalog::{Catalog, SearchQuery};
use crate::core::report;
use crate::error::Result;

/// Search variable values across the organization.
pub fn execute(
    global: &GlobalArgs,
    query: &SearchQuery,
    json: bool,
    output: &OutputArgs,
) -> Result<()> {
    info!(term = %query.term, project = ?query.project, env = ?query.env, "searching");

    let az = connect(global)?;
    let results =
        output::with_spinner(|spinner| Catalog::new(&az, spinner).search(query))?;

    let text = if json {
        format!("{}\n", serde_json::to_string_pretty(&results)?)
    } else {
        report::search_report(&results)
    };

    output::deliver(&text, output, "results")
}
