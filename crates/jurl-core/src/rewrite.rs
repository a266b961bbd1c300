//! Best-effort host/port substitution in JDBC URLs

use crate::authority::{service_name_span, standard_span};
use crate::dialect::oracle_body_start;
use crate::{HostAndPort, UrlDialect};

/// Replace `old` with `new` wherever the URL's dialect keeps its host and port.
///
/// The dialect is detected from the URL text alone. Every other byte of the
/// URL is preserved. When `old` is not found, or the URL cannot be read at
/// all, the input is returned unchanged; this function never fails.
///
/// TNS descriptors are the one case with more than one location: every
/// literal `(HOST=old)` and `(PORT=old)` is replaced, which covers
/// `ADDRESS_LIST` blocks with several addresses.
pub fn replace_host_port(url: &str, old: &HostAndPort, new: &HostAndPort) -> String {
    let dialect = UrlDialect::detect(url);

    let rewritten = match dialect {
        UrlDialect::OracleDescription => replace_in_description(url, old, new),
        UrlDialect::OracleServiceName => replace_service_name(url, old, new),
        UrlDialect::OracleSid => replace_sid(url, old, new),
        UrlDialect::Standard => replace_standard(url, old, new),
    };

    match rewritten {
        Some(rewritten) => {
            tracing::debug!(%dialect, from = %old, to = %new, "rewrote JDBC URL host/port");
            rewritten
        }
        None => {
            tracing::debug!(
                %dialect,
                url = %url,
                from = %old,
                "no matching host/port, URL left unchanged"
            );
            url.to_string()
        }
    }
}

fn replace_in_description(url: &str, old: &HostAndPort, new: &HostAndPort) -> Option<String> {
    let rewritten = url
        .replace(
            &format!("(HOST={})", old.host()),
            &format!("(HOST={})", new.host()),
        )
        .replace(
            &format!("(PORT={})", old.port()),
            &format!("(PORT={})", new.port()),
        );
    (rewritten != url).then_some(rewritten)
}

fn replace_service_name(url: &str, old: &HostAndPort, new: &HostAndPort) -> Option<String> {
    let (span, _) = service_name_span(url, oracle_body_start(url)?)?;
    old.matches(span.host, span.port)
        .then(|| span.splice(url, &new.to_string()))
}

fn replace_sid(url: &str, old: &HostAndPort, new: &HostAndPort) -> Option<String> {
    let start = oracle_body_start(url)?;
    let parts: Vec<&str> = url[start..].split(':').collect();
    let [host, port, sid] = parts.as_slice() else {
        return None;
    };
    old.matches(host, port)
        .then(|| format!("{}{}:{}:{}", &url[..start], new.host(), new.port(), sid))
}

fn replace_standard(url: &str, old: &HostAndPort, new: &HostAndPort) -> Option<String> {
    let span = standard_span(url)?;
    old.matches(span.host, span.port)
        .then(|| span.splice(url, &new.to_string()))
}

#[cfg(test)]
mod tests;
