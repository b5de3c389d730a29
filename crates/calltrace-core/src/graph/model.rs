//! Graph model types

use serde::{Deserialize, Serialize};

/// Kind of symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Function,
    StructOrClass,
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Function => "function",
            Self::StructOrClass => "struct_or_class",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for SymbolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "function" | "fn" | "func" => Ok(Self::Function),
            "struct_or_class" | "struct" | "class" | "type" => Ok(Self::StructOrClass),
            other => Err(format!("unknown symbol kind '{other}'")),
        }
    }
}

/// Identity of one symbol occurrence
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId {
    pub name: String,
    /// Repository-relative file key
    pub file: String,
    /// Start line (1-indexed)
    pub start_line: u32,
}

impl SymbolId {
    #[must_use]
    pub fn new(name: impl Into<String>, file: impl Into<String>, start_line: u32) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            start_line,
        }
    }

    /// `file:line`
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.start_line)
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}:{})", self.name, self.file, self.start_line)
    }
}

/// A symbol definition extracted from source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    /// Symbol name
    pub name: String,
    /// Kind of symbol
    pub kind: SymbolKind,
    /// Repository-relative file key
    pub file: String,
    /// Start line (1-indexed)
    pub start_line: u32,
    /// End line (1-indexed, inclusive)
    pub end_line: u32,
    /// Definition header with whitespace collapsed
    pub signature: String,
    /// Verbatim text of lines `start_line..=end_line`
    #[serde(skip_serializing)]
    pub body: String,
}

impl Symbol {
    #[must_use]
    pub fn id(&self) -> SymbolId {
        SymbolId::new(self.name.clone(), self.file.clone(), self.start_line)
    }

    /// Whether this occurrence has the given identity
    #[must_use]
    pub fn is(&self, id: &SymbolId) -> bool {
        self.start_line == id.start_line && self.name == id.name && self.file == id.file
    }

    /// Number of lines spanned
    #[must_use]
    pub fn line_count(&self) -> u32 {
        self.end_line.saturating_sub(self.start_line) + 1
    }

    /// `file:line`
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.start_line)
    }

    #[must_use]
    pub fn contains_line(&self, line: u32) -> bool {
        line >= self.start_line && line <= self.end_line
    }
}

/// A call edge: `caller`'s body references the known symbol name `callee`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallEdge {
    pub caller: SymbolId,
    pub callee: String,
    /// Every call-site line, in body order
    pub lines: Vec<u32>,
}

impl CallEdge {
    /// First call-site line
    #[must_use]
    pub fn line(&self) -> u32 {
        self.lines.first().copied().unwrap_or(self.caller.start_line)
    }
}
