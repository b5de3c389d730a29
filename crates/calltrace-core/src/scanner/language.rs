//! Language detection utilities

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Source languages recognised by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    C,
    Cpp,
    Python,
    Java,
    JavaScript,
    TypeScript,
    Go,
    Rust,
    /// Admitted by the extension filter but without dedicated rules
    Other,
}

/// Extraction rule family a language is parsed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleFamily {
    /// Brace-delimited C and C++ definitions
    CFamily,
    /// Indentation-scoped `def`/`class` blocks
    Python,
    /// Brace-delimited signatures shared by the remaining languages
    Generic,
}

impl Language {
    /// Detect language from file extension
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "c" => Some(Self::C),
            "h" | "cpp" | "hpp" | "cc" | "cxx" | "hh" | "hxx" => Some(Self::Cpp),
            "py" | "pyi" => Some(Self::Python),
            "java" => Some(Self::Java),
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "tsx" => Some(Self::TypeScript),
            "go" => Some(Self::Go),
            "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    /// Detect language from file path
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Rule family used to extract symbols from this language
    #[must_use]
    pub const fn family(&self) -> RuleFamily {
        match self {
            Self::C | Self::Cpp => RuleFamily::CFamily,
            Self::Python => RuleFamily::Python,
            Self::Java
            | Self::JavaScript
            | Self::TypeScript
            | Self::Go
            | Self::Rust
            | Self::Other => RuleFamily::Generic,
        }
    }

    /// Get the file extensions for this language
    #[must_use]
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::C => &["c"],
            Self::Cpp => &["h", "cpp", "hpp", "cc", "cxx", "hh", "hxx"],
            Self::Python => &["py", "pyi"],
            Self::Java => &["java"],
            Self::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Self::TypeScript => &["ts", "tsx"],
            Self::Go => &["go"],
            Self::Rust => &["rs"],
            Self::Other => &[],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::C => write!(f, "c"),
            Self::Cpp => write!(f, "cpp"),
            Self::Python => write!(f, "python"),
            Self::Java => write!(f, "java"),
            Self::JavaScript => write!(f, "javascript"),
            Self::TypeScript => write!(f, "typescript"),
            Self::Go => write!(f, "go"),
            Self::Rust => write!(f, "rust"),
            Self::Other => write!(f, "other"),
        }
    }
}
