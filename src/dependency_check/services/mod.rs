pub mod messages;
mod reporter;
mod suppressor;

pub use reporter::{Reporter, VulnerabilityStatus};
pub use suppressor::Suppressor;
