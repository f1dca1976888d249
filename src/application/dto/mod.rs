/// Data Transfer Objects for application layer
mod graph_request;
mod graph_response;

pub use graph_request::{GraphRequest, GraphRequestBuilder, DEFAULT_MAX_DEPTH};
pub use graph_response::GraphResponse;
