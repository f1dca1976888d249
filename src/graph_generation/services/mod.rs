mod descriptor_parser;
mod entity_table;

pub use descriptor_parser::{DescriptorParser, MalformedDependency, ParsedDescriptor, POM_NAMESPACE};
