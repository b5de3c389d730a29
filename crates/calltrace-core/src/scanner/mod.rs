//! Scanner module: File discovery and language detection
//!
//! Responsible for walking directories, honouring ignore rules,
//! and detecting the programming language of each file.

mod language;
mod walker;

pub use language::{Language, RuleFamily};
pub use walker::{relative_key, DiscoveredFile, Discovery, Scanner, WalkFailure};
