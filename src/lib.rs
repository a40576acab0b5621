pub mod config;
pub mod crl;
pub mod server;
pub mod setup;
pub mod store;
pub mod telemetry;
