use crate::graph_generation::domain::DependencyId;
use std::path::PathBuf;

/// DescriptorLocator port mapping a dependency to its own descriptor
///
/// This is what lets the graph grow past the root project. A locator that
/// never finds anything limits the graph to the root and its direct
/// dependencies.
pub trait DescriptorLocator {
    /// Returns the descriptor declaring `dependency`, or `None` if unknown
    fn locate(&self, dependency: &DependencyId) -> Option<PathBuf>;
}

impl<T: DescriptorLocator + ?Sized> DescriptorLocator for Box<T> {
    fn locate(&self, dependency: &DependencyId) -> Option<PathBuf> {
        (**self).locate(dependency)
    }
}
