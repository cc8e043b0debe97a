pub mod connection;
pub mod matches;
pub mod players;
pub mod setup;
pub mod statistics;
pub mod store;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use store::SqliteStore;
