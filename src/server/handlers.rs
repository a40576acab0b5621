pub mod crl;
pub mod health;

pub use crl::get_crl;
pub use health::health_check;
