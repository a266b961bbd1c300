//! jurl Connection - JDBC connection parameters
//!
//! This crate wraps the URL parser from `jurl-core` in the objects a test
//! harness hands to database clients: connection parameters that know their
//! own host and port, a catalogue of common JDBC drivers, and connection
//! definitions read from TOML.

mod config;
mod driver;
mod params;

pub use config::{ConnectionEntry, ConnectionsFile, NamedConnection};
pub use driver::JdbcDriver;
pub use params::JdbcConnectionParams;
