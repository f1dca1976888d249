/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod descriptor_locator;
pub mod descriptor_reader;
pub mod diagram_formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use descriptor_locator::DescriptorLocator;
pub use descriptor_reader::DescriptorReader;
pub use diagram_formatter::DiagramFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
