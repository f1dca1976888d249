/// Domain layer - Maven dependency graph model and descriptor parsing
///
/// Nothing in this layer touches the filesystem; descriptors arrive as
/// strings and graphs leave as plain data.
pub mod domain;
pub mod services;
