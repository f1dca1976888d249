use std::collections::HashMap;
use std::path::PathBuf;
use pom_graph::prelude::*;

/// Mock DescriptorLocator resolving identifiers from a fixed table
#[derive(Default)]
pub struct MockDescriptorLocator {
    pub table: HashMap<String, PathBuf>,
}

impl MockDescriptorLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descriptor(mut self, dependency: &str, path: &str) -> Self {
        self.table.insert(dependency.to_string(), PathBuf::from(path));
        self
    }
}

impl DescriptorLocator for MockDescriptorLocator {
    fn locate(&self, dependency: &DependencyId) -> Option<PathBuf> {
        self.table.get(&dependency.to_string()).cloned()
    }
}
