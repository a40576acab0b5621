use crate::crl::Crl;
use crate::store::{CrlStore, Result};
use async_trait::async_trait;
use mongodb::{
    Client, Collection,
    bson::{self, Document, doc},
};

/// Collection the issuing CA publishes its CRL documents to.
pub const CRL_COLLECTION: &str = "r509_mongoid_models_crls";

/// A MongoDB CRL store.
///
/// Reads the `{ca_name, crl_pem}` documents of the `r509_mongoid_models_crls`
/// collection in the configured database.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    database: String,
}

impl MongoStore {
    /// Creates a new MongoDB store from a connected client.
    pub fn new(client: Client, database: impl Into<String>) -> Self {
        Self {
            client,
            database: database.into(),
        }
    }

    fn crls(&self) -> Collection<Document> {
        self.client
            .database(&self.database)
            .collection(CRL_COLLECTION)
    }
}

fn crl_filter(ca_name: &str) -> Document {
    doc! { "ca_name": ca_name }
}

fn crl_update(crl_pem: &str) -> Document {
    doc! { "$set": { "crl_pem": crl_pem } }
}

/// Maps a stored document onto a [`Crl`], ignoring driver metadata such as `_id`.
fn crl_from_document(document: Document) -> Result<Crl> {
    Ok(bson::from_document(document)?)
}

#[async_trait]
impl CrlStore for MongoStore {
    async fn find_crl_by_ca_name(&self, ca_name: &str) -> Result<Option<Crl>> {
        let document = self
            .crls()
            .find_one(crl_filter(ca_name))
            .sort(doc! { "_id": 1 })
            .await?;

        document.map(crl_from_document).transpose()
    }

    async fn store_crl(&self, ca_name: &str, crl_pem: &str) -> Result<()> {
        self.crls()
            .update_one(crl_filter(ca_name), crl_update(crl_pem))
            .upsert(true)
            .await?;
        Ok(())
    }
}
