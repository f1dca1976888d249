/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: filesystem access,
/// console diagnostics, descriptor locators and diagram formatters.
pub mod outbound;
