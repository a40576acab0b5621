use crate::config::Config;
use crate::store::MongoStore;
use color_eyre::eyre::WrapErr;

/// Connects the CRL store described by `config`.
///
/// The store is the only external dependency of the server, so failing to
/// reach it here is treated as fatal by the caller.
pub async fn setup(config: &Config) -> color_eyre::Result<MongoStore> {
    let database = &config.database;
    tracing::info!(database = %database.name, "Connecting to CRL database");

    let client = database.start().await.wrap_err_with(|| {
        format!("Cannot connect to database {}", database.name)
    })?;

    Ok(MongoStore::new(client, database.name.clone()))
}
