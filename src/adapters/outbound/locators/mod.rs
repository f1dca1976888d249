/// Descriptor locators resolving dependencies to their own pom files
mod local_repository_locator;
mod unresolved_locator;

pub use local_repository_locator::LocalRepositoryLocator;
pub use unresolved_locator::UnresolvedLocator;
