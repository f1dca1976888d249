/// Mock implementations for testing
mod mock_descriptor_locator;
mod mock_descriptor_reader;
mod mock_progress_reporter;

pub use mock_descriptor_locator::MockDescriptorLocator;
pub use mock_descriptor_reader::MockDescriptorReader;
pub use mock_progress_reporter::MockProgressReporter;
