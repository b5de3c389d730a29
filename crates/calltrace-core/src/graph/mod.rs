//! Graph module: Symbol model and symbol table
//!
//! Defines the symbols, identities and call edges shared by the analyzer
//! and renderer, and the table a scan produces.

pub mod model;
pub mod table;

pub use model::{CallEdge, Symbol, SymbolId, SymbolKind};
pub use table::{FileFragment, SymbolTable};
