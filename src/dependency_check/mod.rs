/// Dependency check domain layer
///
/// Pure value objects and services: no I/O, no ports.
pub mod domain;
pub mod services;
