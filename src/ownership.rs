//! "Does this address hold this ordinal?", answered by whichever source
//! responds first.

use ordkit_index::OwnershipSource;
use ordkit_primitives::Outpoint;
use tracing::{debug, warn};

pub struct OwnershipResolver {
    sources: Vec<Box<dyn OwnershipSource>>,
}

impl OwnershipResolver {
    /// Sources are consulted in the given order.
    pub fn new(sources: Vec<Box<dyn OwnershipSource>>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|source| source.name())
    }

    /// Whether `address` currently holds the ordinal inscribed at `origin`.
    ///
    /// The first source that answers decides. A source that fails hands over
    /// to the next one, and when every source has failed the answer is `false`.
    pub async fn holds(&self, address: &str, origin: &Outpoint) -> bool {
        for source in &self.sources {
            match source.current_owner(origin).await {
                Ok(owner) => {
                    debug!(source = source.name(), %origin, ?owner, "Resolved current owner");
                    return owner.as_deref() == Some(address);
                }
                Err(err) => {
                    warn!(source = source.name(), %origin, %err, "Ownership lookup failed");
                }
            }
        }
        false
    }
}
