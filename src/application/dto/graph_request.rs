use crate::shared::error::PomGraphError;
use crate::shared::Result;
use std::path::PathBuf;

/// Traversal depth used when neither the CLI nor a config file sets one
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// GraphRequest - request DTO for the graph building use case
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Root pom.xml the traversal starts from (depth 0)
    pub root_descriptor: PathBuf,
    /// Descriptors deeper than this are not visited
    pub max_depth: usize,
    /// Fail instead of skipping dependency entries that lack a coordinate
    pub strict: bool,
}

impl GraphRequest {
    pub fn new(root_descriptor: PathBuf, max_depth: usize, strict: bool) -> Self {
        Self {
            root_descriptor,
            max_depth,
            strict,
        }
    }

    pub fn builder() -> GraphRequestBuilder {
        GraphRequestBuilder::default()
    }
}

/// Builder for [`GraphRequest`]; only the root descriptor is mandatory
#[derive(Debug, Default)]
pub struct GraphRequestBuilder {
    root_descriptor: Option<PathBuf>,
    max_depth: Option<usize>,
    strict: bool,
}

impl GraphRequestBuilder {
    pub fn root_descriptor(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_descriptor = Some(path.into());
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build(self) -> Result<GraphRequest> {
        let root_descriptor = self.root_descriptor.ok_or_else(|| PomGraphError::Validation {
            message: "root_descriptor is required".to_string(),
        })?;

        Ok(GraphRequest {
            root_descriptor,
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            strict: self.strict,
        })
    }
}
