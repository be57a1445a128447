//! CLI commands module.

mod documents;
mod query;
mod util;

pub use documents::DocumentsCommand;
pub use query::QueryCommand;

pub(crate) use util::*;
