//! Command types shared between main and library

use std::path::PathBuf;

use calltrace_core::{Direction, SymbolKind};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "calltrace")]
#[command(author, version, about = "Symbol index and call graph explorer", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Repository every command scans before answering
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RepoArgs {
    /// Path to the repository to scan
    pub path: PathBuf,

    /// Extensions to scan, comma separated (overrides CODE_EXTENSIONS)
    #[arg(long, value_delimiter = ',')]
    pub ext: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index a repository and print the scan manifest
    Scan {
        #[command(flatten)]
        repo: RepoArgs,
    },

    /// Find symbols whose name contains a keyword
    Locate {
        #[command(flatten)]
        repo: RepoArgs,

        /// Keyword to search for (case-insensitive)
        keyword: String,

        /// Only report one kind of symbol (function, class)
        #[arg(long)]
        kind: Option<SymbolKind>,
    },

    /// Render the call tree of a symbol
    Tree {
        #[command(flatten)]
        repo: RepoArgs,

        /// Symbol name
        symbol: String,

        /// Depth in call edges (clamped to the configured ceiling)
        #[arg(long)]
        depth: Option<usize>,

        /// Diagram direction (TD or LR)
        #[arg(long, default_value = "TD")]
        direction: Direction,

        /// Render a sequence diagram instead of a flowchart
        #[arg(long)]
        sequence: bool,
    },

    /// Render every call path between two symbols
    Path {
        #[command(flatten)]
        repo: RepoArgs,

        /// Calling symbol
        source: String,

        /// Called symbol
        target: String,

        /// Longest path in call edges (clamped to the configured ceiling)
        #[arg(long, default_value_t = 5)]
        max_hops: usize,

        /// Diagram direction (TD or LR)
        #[arg(long, default_value = "TD")]
        direction: Direction,
    },

    /// Render the symbols related to a set of keywords
    Concept {
        #[command(flatten)]
        repo: RepoArgs,

        /// Name of the concept
        label: String,

        /// Keywords matched against symbol names and bodies
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,

        /// Diagram direction (TD or LR)
        #[arg(long, default_value = "TD")]
        direction: Direction,
    },

    /// Print the source of every occurrence of a symbol
    Code {
        #[command(flatten)]
        repo: RepoArgs,

        /// Symbol name
        symbol: String,
    },

    /// Score the complexity of every occurrence of a symbol
    Complexity {
        #[command(flatten)]
        repo: RepoArgs,

        /// Symbol name
        symbol: String,
    },

    /// Render a class diagram of classes and their methods
    Classes {
        #[command(flatten)]
        repo: RepoArgs,

        /// Only classes whose name contains this keyword
        keyword: Option<String>,
    },

    /// Render file dependencies derived from calls or includes
    Deps {
        #[command(flatten)]
        repo: RepoArgs,

        /// Graph include/import targets instead of cross-file calls
        #[arg(long)]
        includes: bool,

        /// Diagram direction (TD or LR)
        #[arg(long, default_value = "TD")]
        direction: Direction,
    },
}
