//! jurl Core - host/port parsing and rewriting for JDBC connection URLs
//!
//! This crate is a small, dependency-light library with two entry points:
//!
//! - [`parse`] - find the host and port a JDBC URL points at
//! - [`replace_host_port`] - swap one host/port for another inside a URL,
//!   leaving every other byte untouched
//!
//! Both understand the standard `scheme://host:port/...` layout (including
//! bracketed IPv6 hosts) and the three Oracle layouts: SID, service name and
//! TNS descriptor. See [`UrlDialect`].
//!
//! ```
//! use jurl_core::{HostAndPort, parse, replace_host_port};
//!
//! let url = "jdbc:oracle:thin:@//localhost:49153/XEPDB1";
//! let hp = parse("oracle.jdbc.OracleDriver", url).unwrap();
//! assert_eq!(hp, HostAndPort::new("localhost", 49153));
//!
//! let internal = replace_host_port(url, &hp, &HostAndPort::new("oracle", 1521));
//! assert_eq!(internal, "jdbc:oracle:thin:@//oracle:1521/XEPDB1");
//! ```

mod authority;
mod dialect;
mod error;
mod host_port;
mod parser;
mod rewrite;

pub use dialect::{OracleShape, UrlDialect};
pub use error::*;
pub use host_port::*;
pub use parser::*;
pub use rewrite::*;
