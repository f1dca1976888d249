use std::collections::HashMap;
use std::path::{Path, PathBuf};
use pom_graph::prelude::*;

/// Mock DescriptorReader serving descriptors from memory
#[derive(Default)]
pub struct MockDescriptorReader {
    pub files: HashMap<PathBuf, String>,
    pub should_fail: bool,
}

impl MockDescriptorReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descriptor(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            files: HashMap::new(),
            should_fail: true,
        }
    }
}

impl DescriptorReader for MockDescriptorReader {
    fn read_descriptor(&self, path: &Path) -> Result<Vec<u8>> {
        if self.should_fail {
            anyhow::bail!("Mock descriptor read failure");
        }
        self.files
            .get(path)
            .map(|content| content.as_bytes().to_vec())
            .ok_or_else(|| anyhow::anyhow!("Mock descriptor not found: {}", path.display()))
    }
}
