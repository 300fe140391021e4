pub mod connection;
pub mod shoes;

pub use connection::{init_db, Database};
