/// Diagram formatters
mod plantuml_formatter;

pub use plantuml_formatter::PlantUmlFormatter;
