//! Example catalog: source snippets paired with runnable computations
//!
//! Each entry carries the exact source text shown to the reader and a
//! zero-argument function producing the output for that text. Groups keep
//! entries in presentation order and the catalog keeps groups in page order.

use crate::error::{Error, Result};

/// Error type produced by example computations.
///
/// Examples surface whatever failure their chrono calls produce, so the
/// boxed trait object keeps the signature uniform across the catalog.
pub type ComputeError = Box<dyn std::error::Error + Send + Sync>;

/// A runnable example computation.
///
/// Plain function pointers keep entries `Copy` and give each computation a
/// stable address, which entry identity relies on.
pub type Compute = fn() -> std::result::Result<String, ComputeError>;

/// One example: display source paired with the computation it describes.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    source: &'static str,
    compute: Compute,
}

impl Entry {
    /// Create an entry from source text and its computation
    pub fn new(source: &'static str, compute: Compute) -> Self {
        Self { source, compute }
    }

    /// The source text rendered beside the result
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Run the computation once and return its outcome
    pub fn run(&self) -> std::result::Result<String, ComputeError> {
        (self.compute)()
    }

    /// Whether two entries denote the same example.
    ///
    /// Identity is the pair of source text and computation address. Two
    /// entries built from the same statics compare equal across copies.
    pub fn same_identity(&self, other: &Entry) -> bool {
        self.source == other.source && std::ptr::fn_addr_eq(self.compute, other.compute)
    }
}

/// An ordered, titled collection of entries shown as one section
#[derive(Debug, Clone)]
pub struct ExampleGroup {
    title: &'static str,
    entries: Vec<Entry>,
}

impl ExampleGroup {
    /// Create a group from a title and its entries in display order
    pub fn new(title: &'static str, entries: Vec<Entry>) -> Self {
        Self { title, entries }
    }

    /// The section heading shown above the group's table
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Entries in display order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// The full set of example groups in page order
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<ExampleGroup>,
}

impl Catalog {
    /// Create a catalog from groups in page order
    pub fn new(groups: Vec<ExampleGroup>) -> Self {
        Self { groups }
    }

    /// Groups in page order
    pub fn groups(&self) -> &[ExampleGroup] {
        &self.groups
    }

    /// Total number of entries across all groups
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries().len()).sum()
    }

    /// Look up a group by 1-based position or case-insensitive title fragment.
    ///
    /// Returns the group's 1-based position along with the group so callers
    /// can keep headings numbered consistently with the full page. An empty
    /// query matches nothing.
    pub fn find(&self, query: &str) -> Result<(usize, &ExampleGroup)> {
        if query.trim().is_empty() {
            return Err(Error::UnknownGroup(query.to_string()));
        }
        if let Ok(number) = query.parse::<usize>() {
            if number >= 1 && number <= self.groups.len() {
                return Ok((number, &self.groups[number - 1]));
            }
            return Err(Error::UnknownGroup(query.to_string()));
        }

        let needle = query.to_lowercase();
        self.groups
            .iter()
            .enumerate()
            .find(|(_, group)| group.title().to_lowercase().contains(&needle))
            .map(|(index, group)| (index + 1, group))
            .ok_or_else(|| Error::UnknownGroup(query.to_string()))
    }
}
