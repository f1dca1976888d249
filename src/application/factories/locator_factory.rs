use crate::adapters::outbound::locators::{LocalRepositoryLocator, UnresolvedLocator};
use crate::ports::outbound::DescriptorLocator;
use crate::shared::Result;
use std::path::PathBuf;

/// Locator selection for the factory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorType {
    /// Never resolves dependencies; the graph stays one level deep
    Unresolved,
    /// Resolves dependencies against a Maven-layout local repository
    LocalRepository(PathBuf),
}

impl LocatorType {
    /// `Some(root)` selects a local repository, `None` the unresolved locator
    pub fn from_repository(root: Option<PathBuf>) -> Self {
        match root {
            Some(root) => LocatorType::LocalRepository(root),
            None => LocatorType::Unresolved,
        }
    }
}

/// Factory for creating descriptor locators
pub struct LocatorFactory;

impl LocatorFactory {
    /// Creates the locator for `locator_type`
    ///
    /// # Errors
    /// Returns an error if a local repository root is not a directory
    pub fn create(locator_type: LocatorType) -> Result<Box<dyn DescriptorLocator>> {
        match locator_type {
            LocatorType::Unresolved => Ok(Box::new(UnresolvedLocator::new())),
            LocatorType::LocalRepository(root) => Ok(Box::new(LocalRepositoryLocator::new(root)?)),
        }
    }

    /// Returns the progress message for the specified locator
    pub fn progress_message(locator_type: &LocatorType) -> String {
        match locator_type {
            LocatorType::Unresolved => {
                "🔗 Transitive resolution disabled: only direct dependencies are listed".to_string()
            }
            LocatorType::LocalRepository(root) => {
                format!("🔗 Resolving transitive dependencies from: {}", root.display())
            }
        }
    }
}
