//! pom-graph - dependency graph tool for Maven projects
//!
//! Reads a `pom.xml`, extracts its `groupId:artifactId` dependency
//! identifiers and renders them as a PlantUML diagram. Transitive
//! dependencies are followed when a descriptor locator can map an
//! identifier to another descriptor, up to a configurable depth.
//!
//! # Architecture
//!
//! - **Domain Layer** (`graph_generation`): dependency model and the namespace-aware descriptor parser
//! - **Application Layer** (`application`): the graph building use case
//! - **Ports** (`ports`): interfaces for descriptor access, location, rendering and diagnostics
//! - **Adapters** (`adapters`): filesystem, console, local repository and PlantUML implementations
//! - **Shared** (`shared`): error types and filesystem guards
//!
//! # Example
//!
//! ```no_run
//! use pom_graph::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = BuildDependencyGraphUseCase::new(
//!     FileSystemReader::new(),
//!     UnresolvedLocator::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = GraphRequest::builder().root_descriptor("pom.xml").build()?;
//! let response = use_case.execute(request)?;
//!
//! let diagram = PlantUmlFormatter::new().format(&response.graph)?;
//! println!("{}", diagram);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod graph_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::PlantUmlFormatter;
    pub use crate::adapters::outbound::locators::{LocalRepositoryLocator, UnresolvedLocator};
    pub use crate::application::dto::{GraphRequest, GraphResponse, DEFAULT_MAX_DEPTH};
    pub use crate::application::factories::{LocatorFactory, LocatorType};
    pub use crate::application::use_cases::{BuildDependencyGraphUseCase, TraversalState};
    pub use crate::graph_generation::domain::{DependencyGraph, DependencyId, GraphEntry};
    pub use crate::graph_generation::services::{DescriptorParser, ParsedDescriptor};
    pub use crate::ports::outbound::{
        DescriptorLocator, DescriptorReader, DiagramFormatter, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::PomGraphError;
    pub use crate::shared::Result;
}
