/// Application layer - Services and DTOs
///
/// This layer maps API operations onto requests sent through the
/// transport port, and holds the DTOs exchanged with adapters.
pub mod dto;
pub mod factories;
pub mod services;
