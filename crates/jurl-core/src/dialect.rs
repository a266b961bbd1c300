//! URL dialect detection
//!
//! A JDBC URL keeps its host and port in one of a handful of places depending
//! on the database family. The dialect is never stored: it is sniffed from the
//! URL text (and, when parsing, from the driver class name) every time.
//!
//! Oracle URLs come in three shapes, all introduced by `jdbc:oracle:<type>:@`:
//!
//! - `@(DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST=db)(PORT=1521))...)`
//! - `@//db:1521/service`
//! - `@db:1521:SID`

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Matches everything up to and including the `@` of an Oracle URL
static ORACLE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^jdbc:oracle:[^@]*@").expect("Oracle URL prefix pattern is valid")
});

/// Marker that routes a URL to the TNS descriptor rewrite strategy
pub(crate) const DESCRIPTION_MARKER: &str = "(DESCRIPTION=";

/// Driver class name prefix that selects Oracle parsing
const ORACLE_DRIVER_PREFIX: &str = "oracle.";

/// URL syntax family that decides where host and port live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlDialect {
    /// `scheme://host:port/...`, including bracketed IPv6 hosts
    Standard,
    /// `jdbc:oracle:thin:@host:port:SID`
    OracleSid,
    /// `jdbc:oracle:thin:@//host:port/service`
    OracleServiceName,
    /// `jdbc:oracle:thin:@(DESCRIPTION=...(HOST=h)(PORT=p)...)`
    OracleDescription,
}

impl UrlDialect {
    /// Detect the dialect from the URL shape alone.
    ///
    /// This is the detection used when rewriting. A URL that contains the
    /// literal `(DESCRIPTION=` is treated as a TNS descriptor whatever its
    /// prefix.
    pub fn detect(url: &str) -> Self {
        if url.contains(DESCRIPTION_MARKER) {
            return UrlDialect::OracleDescription;
        }
        match oracle_body_start(url) {
            Some(start) => OracleShape::sniff(&url[start..]).dialect(),
            None => UrlDialect::Standard,
        }
    }

    /// The dialect `parse` uses for this driver class name and URL
    pub fn for_driver(driver_class_name: &str, url: &str) -> Self {
        if is_oracle_driver(driver_class_name) {
            OracleShape::sniff(oracle_body(url)).dialect()
        } else {
            UrlDialect::Standard
        }
    }

    pub fn is_oracle(&self) -> bool {
        !matches!(self, UrlDialect::Standard)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UrlDialect::Standard => "standard",
            UrlDialect::OracleSid => "Oracle SID",
            UrlDialect::OracleServiceName => "Oracle service-name",
            UrlDialect::OracleDescription => "Oracle TNS descriptor",
        }
    }
}

impl fmt::Display for UrlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Shape of the text that follows the `@` in an Oracle URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleShape {
    /// Begins with `(`
    Description,
    /// Begins with `//`
    ServiceName,
    /// Anything else: `host:port:SID`
    Sid,
}

impl OracleShape {
    /// Classify the part of an Oracle URL after the `@`
    pub fn sniff(body: &str) -> Self {
        if body.starts_with('(') {
            OracleShape::Description
        } else if body.starts_with("//") {
            OracleShape::ServiceName
        } else {
            OracleShape::Sid
        }
    }

    pub fn dialect(self) -> UrlDialect {
        match self {
            OracleShape::Description => UrlDialect::OracleDescription,
            OracleShape::ServiceName => UrlDialect::OracleServiceName,
            OracleShape::Sid => UrlDialect::OracleSid,
        }
    }
}

pub(crate) fn is_oracle_driver(driver_class_name: &str) -> bool {
    driver_class_name.starts_with(ORACLE_DRIVER_PREFIX)
}

/// Byte offset just past the `@` of a `jdbc:oracle:...@` URL
pub(crate) fn oracle_body_start(url: &str) -> Option<usize> {
    ORACLE_PREFIX.find(url).map(|m| m.end())
}

/// The Oracle URL with its `jdbc:oracle:<type>:[credentials]@` prefix removed.
///
/// URLs that do not carry the full prefix are stripped piecewise so bare
/// `thin:@host:1521:SID` or `@//host:1521/svc` strings still parse.
pub(crate) fn oracle_body(url: &str) -> &str {
    if let Some(start) = oracle_body_start(url) {
        return &url[start..];
    }
    let body = url.strip_prefix("jdbc:oracle:").unwrap_or(url);
    let body = body.strip_prefix("thin:").unwrap_or(body);
    body.strip_prefix('@').unwrap_or(body)
}
