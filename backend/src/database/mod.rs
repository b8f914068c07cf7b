pub mod connection;
pub mod matches;
pub mod players;
pub mod setup;
pub mod tournaments;

pub use connection::{create_pool, get_connection, open, DbConn, DbPool};
