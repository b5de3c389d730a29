//! Query commands: tabular answers about indexed symbols

mod run;

pub use run::{code, complexity, locate};
