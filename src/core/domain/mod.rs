//! Domain types.

mod diff;
mod env_map;
mod group_summary;
mod search_result;
mod variable_group;

pub use diff::{DiffEntry, GroupDiff, Side};
pub use env_map::{quote_if_needed, EnvMap};
pub use group_summary::GroupSummary;
pub use search_result::SearchResult;
pub use variable_group::{env_label, Identity, VariableGroup, VariableRecord};
