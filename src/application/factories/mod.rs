mod locator_factory;

pub use locator_factory::{LocatorFactory, LocatorType};
