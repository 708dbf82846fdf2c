//! # Config Check Domain
//!
//! Loading of the MCP client configuration and the check of a single
//! server descriptor.
//!
//! ## Modules
//! - `document`: reading and parsing the JSON file
//! - `inspection`: locating the server entry and judging its `args`

pub mod document;
pub mod inspection;

pub use document::load_document;
pub use inspection::{Inspection, Verdict, inspect};
