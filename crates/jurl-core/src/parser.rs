//! Host/port extraction from JDBC URLs
//!
//! Parsing runs a fixed sequence of strategies. Each strategy reports success
//! or failure as a value and the next one is tried on failure:
//!
//! 1. Oracle drivers (`oracle.*` class names) use the Oracle shape parsers
//!    and nothing else.
//! 2. Everything else is first read as a regular URI with the `url` crate.
//! 3. If that does not yield both a host and an explicit port, the text
//!    between `//` and the next `/` is split by hand. This is what handles
//!    bracketed IPv6 hosts, `;key=value` property lists and other forms the
//!    URI grammar rejects.

use crate::authority::{service_name_span, standard_span};
use crate::dialect::{is_oracle_driver, oracle_body};
use crate::{HostAndPort, JurlError, OracleShape, Result, UrlDialect};
use url::Url;

/// Extract the host and port a JDBC URL points at.
///
/// `driver_class_name` only matters for Oracle: class names starting with
/// `oracle.` switch to the Oracle URL shapes.
///
/// # Errors
///
/// Returns [`JurlError::InvalidUrl`] when no strategy finds a non-empty host
/// and a port in `0..=65535`.
pub fn parse(driver_class_name: &str, url: &str) -> Result<HostAndPort> {
    let result = if is_oracle_driver(driver_class_name) {
        parse_oracle(url)
    } else {
        match parse_uri(url) {
            Some(hp) => Ok(hp),
            None => parse_fallback(url),
        }
    };

    match &result {
        Ok(hp) => tracing::trace!(
            driver = %driver_class_name,
            url = %url,
            host = %hp.host(),
            port = hp.port(),
            "parsed JDBC URL"
        ),
        Err(e) => tracing::debug!(
            driver = %driver_class_name,
            url = %url,
            error = %e,
            "failed to parse JDBC URL"
        ),
    }
    result
}

/// Read the URL as a regular URI, after dropping a leading `jdbc:`
fn parse_uri(url: &str) -> Option<HostAndPort> {
    let uri = Url::parse(url.strip_prefix("jdbc:").unwrap_or(url)).ok()?;

    // The url crate brackets IPv6 literals and percent-encodes non-ASCII
    // hosts. Only accept its host when it is the text written in the URL,
    // otherwise the fallback reads it verbatim.
    let host = uri.host_str().filter(|h| !h.is_empty())?;
    if standard_span(url)?.host != host {
        return None;
    }

    let port = uri.port()?;
    Some(HostAndPort::new(host, port))
}

/// Split the `//host:port` segment by hand
fn parse_fallback(url: &str) -> Result<HostAndPort> {
    standard_span(url)
        .and_then(|span| host_and_port(span.host, span.port))
        .ok_or_else(|| JurlError::invalid_url(url, UrlDialect::Standard))
}

fn parse_oracle(url: &str) -> Result<HostAndPort> {
    let body = oracle_body(url);
    let shape = OracleShape::sniff(body);

    let found = match shape {
        OracleShape::Description => parse_description(body),
        OracleShape::ServiceName => parse_service_name(body),
        OracleShape::Sid => parse_sid(body),
    };

    found.ok_or_else(|| JurlError::invalid_url(url, shape.dialect()))
}

/// `(DESCRIPTION=...(HOST=h)(PORT=p)...)`, keys matched case-insensitively.
/// With several ADDRESS entries the first HOST and first PORT win.
fn parse_description(body: &str) -> Option<HostAndPort> {
    let host = descriptor_value(body, "HOST=")?;
    let port = descriptor_value(body, "PORT=")?;
    host_and_port(host, port)
}

/// `//host:port/service`
fn parse_service_name(body: &str) -> Option<HostAndPort> {
    let (span, has_service) = service_name_span(body, 0)?;
    if !has_service {
        return None;
    }
    host_and_port(span.host, span.port)
}

/// `host:port:SID`
fn parse_sid(body: &str) -> Option<HostAndPort> {
    let mut parts = body.split(':');
    let host = parts.next()?;
    let port = parts.next()?;
    host_and_port(host, port)
}

/// Value of `KEY=` up to the next `)`
fn descriptor_value<'a>(body: &'a str, key: &str) -> Option<&'a str> {
    // ASCII upper-casing keeps byte offsets identical to `body`
    let start = body.to_ascii_uppercase().find(key)? + key.len();
    let len = body[start..].find(')')?;
    Some(body[start..start + len].trim())
}

fn host_and_port(host: &str, port: &str) -> Option<HostAndPort> {
    if host.is_empty() {
        return None;
    }
    let port = port.trim().parse::<u16>().ok()?;
    Some(HostAndPort::new(host, port))
}
