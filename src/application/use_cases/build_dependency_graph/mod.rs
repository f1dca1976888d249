use crate::application::dto::{GraphRequest, GraphResponse};
use crate::graph_generation::domain::{DependencyGraph, DependencyId};
use crate::graph_generation::services::DescriptorParser;
use crate::ports::outbound::{DescriptorLocator, DescriptorReader, ProgressReporter};
use crate::shared::error::PomGraphError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Mutable state threaded through one traversal
#[derive(Debug, Default)]
pub struct TraversalState {
    graph: DependencyGraph,
    unparsable_descriptors: Vec<PathBuf>,
    skipped_dependencies: usize,
}

impl TraversalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn into_response(self) -> GraphResponse {
        GraphResponse::new(
            self.graph,
            self.unparsable_descriptors,
            self.skipped_dependencies,
        )
    }
}

/// BuildDependencyGraphUseCase - builds the dependency graph of a Maven project
///
/// # Type Parameters
/// * `DR` - DescriptorReader implementation
/// * `DL` - DescriptorLocator implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildDependencyGraphUseCase<DR, DL, PR> {
    descriptor_reader: DR,
    descriptor_locator: DL,
    progress_reporter: PR,
}

impl<DR, DL, PR> BuildDependencyGraphUseCase<DR, DL, PR>
where
    DR: DescriptorReader,
    DL: DescriptorLocator,
    PR: ProgressReporter,
{
    pub fn new(descriptor_reader: DR, descriptor_locator: DL, progress_reporter: PR) -> Self {
        Self {
            descriptor_reader,
            descriptor_locator,
            progress_reporter,
        }
    }

    /// Builds the graph rooted at `request.root_descriptor`
    ///
    /// # Errors
    /// Returns an error if a descriptor cannot be read, or in strict mode if
    /// a dependency entry lacks a coordinate. Descriptors that cannot be
    /// decoded or are not well-formed XML are reported and contribute no
    /// dependencies.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading Maven descriptor from: {}",
            request.root_descriptor.display()
        ));

        let mut state = TraversalState::new();
        self.build_graph(&request.root_descriptor, 0, &request, &mut state)?;

        self.progress_reporter.report(&format!(
            "📊 Dependency graph: {} descriptor(s), {} edge(s)",
            state.graph.descriptor_count(),
            state.graph.edge_count()
        ));

        Ok(state.into_response())
    }

    /// Bounded depth-first traversal from `descriptor`.
    ///
    /// No-op when `depth` exceeds `request.max_depth` or when the descriptor
    /// is already in the graph. A descriptor is recorded before its
    /// dependencies are followed, so cycles terminate.
    pub fn build_graph(
        &self,
        descriptor: &Path,
        depth: usize,
        request: &GraphRequest,
        state: &mut TraversalState,
    ) -> Result<()> {
        if depth > request.max_depth || state.graph.contains(descriptor) {
            return Ok(());
        }

        let dependencies = self.parse_descriptor(descriptor, request.strict, state)?;
        self.progress_reporter.report(&format!(
            "✅ Detected {} dependency(ies) in {}",
            dependencies.len(),
            descriptor.display()
        ));

        state
            .graph
            .insert(descriptor.to_path_buf(), dependencies.clone());

        // Anything located here would be visited at depth + 1 and dropped.
        if depth >= request.max_depth {
            return Ok(());
        }

        for dependency in &dependencies {
            if let Some(found) = self.descriptor_locator.locate(dependency) {
                self.progress_reporter.report(&format!(
                    "   🔎 {} -> {}",
                    dependency,
                    found.display()
                ));
                self.build_graph(&found, depth + 1, request, state)?;
            }
        }

        Ok(())
    }

    fn parse_descriptor(
        &self,
        descriptor: &Path,
        strict: bool,
        state: &mut TraversalState,
    ) -> Result<Vec<DependencyId>> {
        let content = self.descriptor_reader.read_descriptor(descriptor)?;

        let parsed = match DescriptorParser::parse(&content) {
            Ok(parsed) => parsed,
            Err(e) => {
                let error = PomGraphError::DescriptorParseError {
                    path: descriptor.to_path_buf(),
                    details: e.to_string(),
                };
                self.progress_reporter.report_error(&format!("❌ {}", error));
                state.unparsable_descriptors.push(descriptor.to_path_buf());
                return Ok(Vec::new());
            }
        };

        for malformed in &parsed.malformed {
            if strict {
                return Err(PomGraphError::MissingCoordinate {
                    path: descriptor.to_path_buf(),
                    position: malformed.position,
                    field: malformed.missing,
                }
                .into());
            }
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipping dependency #{} in {}: no {}",
                malformed.position,
                descriptor.display(),
                malformed.missing
            ));
            state.skipped_dependencies += 1;
        }

        Ok(parsed.dependencies)
    }
}
