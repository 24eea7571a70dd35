/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the services are called directly
/// by the CLI and by library users.
pub mod outbound;
