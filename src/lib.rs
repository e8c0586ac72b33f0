pub mod config;
pub mod discovery;
pub mod ownership;
pub mod wallet;

pub use ordkit_index as index;
pub use ordkit_primitives as primitives;

pub use config::Config;
pub use discovery::{DiscoveryError, UtxoDiscovery};
pub use ownership::OwnershipResolver;
