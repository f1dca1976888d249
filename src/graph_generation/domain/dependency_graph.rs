use super::DependencyId;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One visited descriptor and the dependencies it declares, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEntry {
    descriptor: PathBuf,
    dependencies: Vec<DependencyId>,
}

impl GraphEntry {
    pub fn descriptor(&self) -> &Path {
        &self.descriptor
    }

    pub fn dependencies(&self) -> &[DependencyId] {
        &self.dependencies
    }

    /// Final path component of the descriptor, as shown in diagrams
    pub fn display_name(&self) -> String {
        self.descriptor
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// DependencyGraph aggregate: descriptor path -> declared dependencies.
///
/// Entries keep insertion order (depth-first discovery, root first) and a
/// path can only be inserted once.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    entries: Vec<GraphEntry>,
    index: HashMap<PathBuf, usize>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, descriptor: &Path) -> bool {
        self.index.contains_key(descriptor)
    }

    /// Records the dependencies of `descriptor`.
    ///
    /// Returns `false` and leaves the graph untouched if the descriptor is
    /// already present.
    pub fn insert(&mut self, descriptor: PathBuf, dependencies: Vec<DependencyId>) -> bool {
        if self.contains(&descriptor) {
            return false;
        }
        self.index.insert(descriptor.clone(), self.entries.len());
        self.entries.push(GraphEntry {
            descriptor,
            dependencies,
        });
        true
    }

    pub fn dependencies_of(&self, descriptor: &Path) -> Option<&[DependencyId]> {
        self.index
            .get(descriptor)
            .map(|&i| self.entries[i].dependencies())
    }

    pub fn entries(&self) -> &[GraphEntry] {
        &self.entries
    }

    pub fn descriptor_count(&self) -> usize {
        self.entries.len()
    }

    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|e| e.dependencies.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
