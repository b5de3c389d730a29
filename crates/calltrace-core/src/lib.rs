//! calltrace-core: Symbol indexing, call graph analysis and Mermaid rendering
//!
//! The pipeline runs strictly downstream:
//!
//! - **index** walks a source tree and extracts symbols into a [`SymbolTable`]
//! - **analysis** discovers call edges and answers tree, path and concept queries
//! - **render** turns query results into Mermaid diagram text
//!
//! Extraction is pattern based, not a full parser. Call edges are textual
//! references to known symbol names.
//!
//! # Supported Languages
//!
//! - **C / C++** - functions, records, anonymous typedefs, `#include`
//! - **Python** - `def`, `async def`, `class`, imports
//! - **Java, JavaScript, TypeScript, Go, Rust** - functions, methods, types, imports

pub mod analysis;
pub mod config;
pub mod extract;
pub mod graph;
pub mod index;
pub mod render;
pub mod scanner;
pub mod store;

// Re-export commonly used types
pub use analysis::{Analyzer, QueryStatus};
pub use config::{AnalysisLimits, IndexConfig};
pub use extract::{SourceFile, SymbolExtractor};
pub use graph::model::{CallEdge, Symbol, SymbolId, SymbolKind};
pub use graph::table::SymbolTable;
pub use index::{scan, IndexError, Indexer, ScanManifest, ScanOutcome};
pub use render::{Diagram, Direction};
pub use scanner::{DiscoveredFile, Language, Scanner};
pub use store::IndexStore;
