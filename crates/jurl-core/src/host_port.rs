//! Host and port value type

use crate::{JurlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A host and port pair located inside a connection URL.
///
/// Hosts are stored exactly as they appear in the URL, except that IPv6
/// literals are kept without their surrounding brackets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostAndPort {
    host: String,
    port: u16,
}

impl HostAndPort {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether the host is an IPv6 literal and needs brackets inside a URL
    pub fn is_ipv6(&self) -> bool {
        self.host.contains(':')
    }

    /// Check that the host is non-empty
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(JurlError::InvalidHostPort(
                "host cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `host` and `port` as found in a URL name this pair.
    ///
    /// The port is compared numerically so `05432` matches `5432`.
    pub(crate) fn matches(&self, host: &str, port: &str) -> bool {
        self.host == host && port.parse::<u16>().ok() == Some(self.port)
    }
}

impl fmt::Display for HostAndPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ipv6() {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl FromStr for HostAndPort {
    type Err = JurlError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || JurlError::InvalidHostPort(s.to_string());

        let (host, port) = if let Some(rest) = s.strip_prefix('[') {
            let (host, after) = rest.split_once(']').ok_or_else(invalid)?;
            let port = after.strip_prefix(':').ok_or_else(invalid)?;
            (host, port)
        } else {
            s.rsplit_once(':').ok_or_else(invalid)?
        };

        let port = port.parse::<u16>().map_err(|_| invalid())?;
        let hp = HostAndPort::new(host, port);
        hp.validate().map_err(|_| invalid())?;
        Ok(hp)
    }
}

impl From<(&str, u16)> for HostAndPort {
    fn from((host, port): (&str, u16)) -> Self {
        Self::new(host, port)
    }
}
