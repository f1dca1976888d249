/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the seams between the graph-building use case and
/// the filesystem, the console and diagram output.
pub mod outbound;
