use crate::graph_generation::domain::DependencyGraph;
use crate::ports::outbound::DiagramFormatter;
use crate::shared::Result;

const START_MARKER: &str = "@startuml";
const END_MARKER: &str = "@enduml";

/// PlantUmlFormatter adapter rendering the graph as a PlantUML edge list
///
/// ```text
/// @startuml
/// "pom.xml" --> "org.a:lib1"
/// @enduml
/// ```
///
/// Descriptors are labelled by file name only and identifiers are written
/// verbatim, so nothing is deduplicated or escaped. Lines are joined with
/// `\n` and there is no trailing newline.
pub struct PlantUmlFormatter;

impl PlantUmlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlantUmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramFormatter for PlantUmlFormatter {
    fn format(&self, graph: &DependencyGraph) -> Result<String> {
        let mut lines = Vec::with_capacity(graph.edge_count() + 2);
        lines.push(START_MARKER.to_string());

        for entry in graph.entries() {
            let parent = entry.display_name();
            for dependency in entry.dependencies() {
                lines.push(format!("\"{}\" --> \"{}\"", parent, dependency));
            }
        }

        lines.push(END_MARKER.to_string());
        Ok(lines.join("\n"))
    }
}
