pub mod ranking;
pub mod server;
