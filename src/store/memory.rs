use crate::crl::Crl;
use crate::store::{CrlStore, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// An in-memory CRL store.
///
/// Useful for testing and development.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    crls: Arc<DashMap<String, Crl>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CrlStore for MemoryStore {
    async fn find_crl_by_ca_name(&self, ca_name: &str) -> Result<Option<Crl>> {
        Ok(self.crls.get(ca_name).map(|crl| crl.value().clone()))
    }

    async fn store_crl(&self, ca_name: &str, crl_pem: &str) -> Result<()> {
        self.crls
            .insert(ca_name.to_string(), Crl::new(ca_name, crl_pem));
        Ok(())
    }
}
