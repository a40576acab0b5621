use async_trait::async_trait;
use color_eyre::Report;
use std::error::Error as StdError;
use std::fmt;

use crate::crl::Crl;

mod memory;
mod mongo;

pub use self::memory::MemoryStore;
pub use self::mongo::{CRL_COLLECTION, MongoStore};

type Result<T> = std::result::Result<T, StoreError>;

/// Error type for CRL store operations.
#[derive(Debug)]
pub struct StoreError {
    error: Report,
}

impl StoreError {
    pub fn new<T>(error: T) -> Self
    where
        T: StdError + Send + Sync + 'static,
    {
        Self {
            error: Report::new(error),
        }
    }

    pub fn msg<T>(message: T) -> Self
    where
        T: fmt::Debug + fmt::Display + Send + Sync + 'static,
    {
        Self {
            error: Report::msg(message),
        }
    }
}

impl StdError for StoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.error.source()
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(error: mongodb::error::Error) -> Self {
        Self::new(error)
    }
}

impl From<mongodb::bson::de::Error> for StoreError {
    fn from(error: mongodb::bson::de::Error) -> Self {
        Self::new(error)
    }
}

/// Abstract interface for CRL storage backends.
///
/// Handlers clone the store for every request. For [`MongoStore`] the clone is
/// a per-request client handle, released when it is dropped.
#[async_trait]
pub trait CrlStore: Send + Sync + Clone + 'static {
    /// Looks up the authoritative CRL of the given CA.
    ///
    /// Returns `Ok(None)` when no CRL has been published for `ca_name`.
    async fn find_crl_by_ca_name(&self, ca_name: &str) -> Result<Option<Crl>>;

    /// Publishes `crl_pem` for the given CA, replacing any previous CRL.
    async fn store_crl(&self, ca_name: &str, crl_pem: &str) -> Result<()>;
}
