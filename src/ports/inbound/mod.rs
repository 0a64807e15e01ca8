/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod dependencies_check_port;

pub use dependencies_check_port::DependenciesCheckPort;
