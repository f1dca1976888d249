use crate::graph_generation::domain::DependencyId;
use crate::ports::outbound::DescriptorLocator;
use std::path::PathBuf;

/// Locator that never finds a descriptor.
///
/// This is the default: the graph then holds only the root descriptor and
/// its direct dependencies, whatever the configured depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnresolvedLocator;

impl UnresolvedLocator {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptorLocator for UnresolvedLocator {
    fn locate(&self, _dependency: &DependencyId) -> Option<PathBuf> {
        None
    }
}
