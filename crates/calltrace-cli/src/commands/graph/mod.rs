//! Graph commands: Mermaid diagrams of call trees, paths, concepts, classes
//! and files

mod run;

pub use run::{classes, concept, deps, path, tree};
