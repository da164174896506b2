pub mod connection;
pub mod kv_repo;
pub mod migrations;
pub mod state_repo;
pub mod storage;

pub use connection::*;
pub use storage::Storage;
