//! Symbol table: every extracted occurrence, indexed by name and file

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use super::model::{Symbol, SymbolId, SymbolKind};
use crate::extract::{self, SourceFile};

/// Extraction output for a single file, ready to be merged into a table
#[derive(Debug, Clone)]
pub struct FileFragment {
    pub source: SourceFile,
    pub symbols: Vec<Symbol>,
    pub includes: Vec<String>,
    pub unterminated: usize,
}

impl FileFragment {
    /// Run the extraction rules for the file's language
    #[must_use]
    pub fn extract(source: SourceFile) -> Self {
        let extraction = extract::extract(&source);
        Self {
            source,
            symbols: extraction.symbols,
            includes: extraction.includes,
            unterminated: extraction.unterminated,
        }
    }
}

/// Read-only index of all symbols found in one scan
///
/// Names are not unique; every occurrence is kept and addressed by its
/// [`SymbolId`]. Occurrences are stored sorted by file, start line and name.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    by_name: BTreeMap<String, Vec<usize>>,
    by_file: BTreeMap<String, Vec<usize>>,
    includes: BTreeMap<String, Vec<String>>,
    sources: BTreeMap<String, SourceFile>,
}

impl SymbolTable {
    /// Merge per-file fragments. Order of the fragments does not matter.
    #[must_use]
    pub fn from_fragments(fragments: impl IntoIterator<Item = FileFragment>) -> Self {
        let mut table = Self::default();
        for fragment in fragments {
            table.symbols.extend(fragment.symbols);
            table
                .includes
                .insert(fragment.source.key.clone(), fragment.includes);
            table
                .sources
                .insert(fragment.source.key.clone(), fragment.source);
        }

        table.symbols.sort_by(|a, b| {
            (&a.file, a.start_line, &a.name).cmp(&(&b.file, b.start_line, &b.name))
        });
        table
            .symbols
            .dedup_by(|a, b| a.file == b.file && a.start_line == b.start_line && a.name == b.name);

        for (index, symbol) in table.symbols.iter().enumerate() {
            table
                .by_name
                .entry(symbol.name.clone())
                .or_default()
                .push(index);
            table
                .by_file
                .entry(symbol.file.clone())
                .or_default()
                .push(index);
        }
        table
    }

    /// Build a table from in-memory sources through the same extraction path
    /// a filesystem scan uses.
    #[must_use]
    pub fn from_sources(sources: impl IntoIterator<Item = SourceFile>) -> Self {
        Self::from_fragments(sources.into_iter().map(FileFragment::extract))
    }

    /// All occurrences, sorted by file then line
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Every occurrence of `name`, in file then line order
    pub fn occurrences<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Symbol> + 'a {
        self.occurrence_indices(name)
            .iter()
            .map(move |&i| &self.symbols[i])
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Distinct symbol names in lexical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// Look up one occurrence by identity
    #[must_use]
    pub fn get(&self, id: &SymbolId) -> Option<&Symbol> {
        self.index_of(id).map(|i| &self.symbols[i])
    }

    /// Symbols defined in a file, in line order
    pub fn symbols_in_file<'a>(&'a self, file: &str) -> impl Iterator<Item = &'a Symbol> + 'a {
        self.by_file
            .get(file)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&i| &self.symbols[i])
    }

    /// Keys of every indexed file, including files without symbols
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Raw include/import targets of a file
    #[must_use]
    pub fn includes(&self, file: &str) -> &[String] {
        self.includes.get(file).map_or(&[], Vec::as_slice)
    }

    /// Include/import targets of every file
    #[must_use]
    pub fn all_includes(&self) -> &BTreeMap<String, Vec<String>> {
        &self.includes
    }

    #[must_use]
    pub fn source(&self, file: &str) -> Option<&SourceFile> {
        self.sources.get(file)
    }

    /// SHA-256 over every symbol identity and line range, hex encoded.
    /// Equal tables always have equal fingerprints.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for symbol in &self.symbols {
            hasher.update(symbol.file.as_bytes());
            hasher.update([0]);
            hasher.update(symbol.name.as_bytes());
            hasher.update([0]);
            hasher.update(symbol.kind.to_string().as_bytes());
            hasher.update(symbol.start_line.to_le_bytes());
            hasher.update(symbol.end_line.to_le_bytes());
        }
        for (file, source) in &self.sources {
            hasher.update(file.as_bytes());
            hasher.update(source.content_hash.as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }

    #[must_use]
    pub fn function_count(&self) -> usize {
        self.count_kind(SymbolKind::Function)
    }

    #[must_use]
    pub fn struct_count(&self) -> usize {
        self.count_kind(SymbolKind::StructOrClass)
    }

    fn count_kind(&self, kind: SymbolKind) -> usize {
        self.symbols.iter().filter(|s| s.kind == kind).count()
    }

    pub(crate) fn index_of(&self, id: &SymbolId) -> Option<usize> {
        self.occurrence_indices(&id.name)
            .iter()
            .copied()
            .find(|&i| self.symbols[i].is(id))
    }

    pub(crate) fn occurrence_indices(&self, name: &str) -> &[usize] {
        self.by_name.get(name).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn symbol_at(&self, index: usize) -> &Symbol {
        &self.symbols[index]
    }
}
