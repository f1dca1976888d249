/// Application layer - Use cases and DTOs
///
/// Orchestrates the domain parser and graph model through the outbound
/// ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
