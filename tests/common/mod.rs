use crl_server::{
    config::Config,
    server::Server,
    store::{CrlStore, MemoryStore},
};

#[allow(dead_code)]
pub const CRL_PEM: &str = "-----BEGIN X509 CRL-----\nMTIzNDU2Nzg5\n-----END X509 CRL-----\n";

// Helper function to spawn a test server on a random port
pub async fn spawn_server(store: MemoryStore) -> String {
    let config = {
        let mut config = Config::load().unwrap();
        config.server.host = "127.0.0.1".to_string();
        // Use a random OS port
        config.server.port = 0;
        config
    };

    let server = Server::new(store, &config.server).await.unwrap();

    let port = server.port().unwrap();
    tokio::spawn(async move {
        server.run().await.expect("failed to run server");
    });

    format!("http://{}:{}", config.server.host, port)
}

// Helper function to build a store holding the given CRLs
#[allow(dead_code)]
pub async fn seeded_store(crls: &[(&str, &str)]) -> MemoryStore {
    let store = MemoryStore::new();
    for (ca_name, crl_pem) in crls {
        store.store_crl(ca_name, crl_pem).await.unwrap();
    }
    store
}
