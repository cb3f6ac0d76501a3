//! capi - search, list, export and compare Azure DevOps variable groups.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── search        # Find variables whose value contains a term
//! │   ├── list          # List variable groups
//! │   ├── export        # Export one group as .env
//! │   ├── compare       # Keys exclusive to each of two groups
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal styling and spinner
//! └── core/             # Core library components
//!     ├── catalog/      # Resolution, search, inventory, export, compare
//!     ├── gateway/      # RemoteGateway trait and Azure CLI backend
//!     ├── domain/       # VariableGroup, EnvMap, SearchResult, GroupDiff
//!     ├── filter        # Project, environment and term predicates
//!     ├── progress      # Progress notifier and scoped step guard
//!     ├── report        # Text report rendering
//!     └── config        # .capi.toml defaults
//! ```
//!
//! # Example
//!
//! ```no_run
//! use capi::{AzCli, Catalog, SearchQuery};
//!
//! let az = AzCli::locate("https://dev.azure.com/my-org", None)?;
//! let catalog = Catalog::silent(&az);
//! let hits = catalog.search(&SearchQuery::new("db01").env("DEV").ignore_case(true))?;
//! println!("{}", capi::core::report::search_report(&hits));
//! # Ok::<(), capi::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::catalog::{Catalog, Comparison, ExportedGroup, NamedEnv, SearchQuery};
pub use crate::core::domain::{
    EnvMap, GroupDiff, GroupSummary, Identity, SearchResult, VariableGroup, VariableRecord,
};
pub use crate::core::gateway::{AzCli, RemoteGateway};
pub use crate::core::progress::{Progress, Silent};
