//! Tool domain model: definitions, categories, the catalog, and stage-1
//! intent parsing.

mod catalog;
mod category;
mod definition;
mod intent;

pub use catalog::{CatalogError, ToolCatalog};
pub use category::Category;
pub use definition::{Endpoint, ParamSpec, ToolDefinition};
pub use intent::{parse_stage1_reply, IntentDecision};
