pub mod config;
pub mod identity;

pub use config::{ConfigBackend, GitCli};
pub use identity::{Identity, current_identity, set_identity};
