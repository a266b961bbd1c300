//! Locating the host:port segment of a URL

/// Characters that end the host:port segment of a standard URL
const SEGMENT_TERMINATORS: &[char] = &['/', '?', ';'];

/// Where a host:port pair sits inside a URL.
///
/// `start..end` covers the whole pair including IPv6 brackets, so splicing a
/// replacement into that range leaves the rest of the URL untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HostPortSpan<'a> {
    pub start: usize,
    pub end: usize,
    pub host: &'a str,
    pub port: &'a str,
}

impl HostPortSpan<'_> {
    /// Replace this span of `url` with `replacement`
    pub fn splice(&self, url: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(url.len() + replacement.len());
        out.push_str(&url[..self.start]);
        out.push_str(replacement);
        out.push_str(&url[self.end..]);
        out
    }
}

/// Find the host:port of a `scheme://[userinfo@]host:port[/...]` URL
pub(crate) fn standard_span(url: &str) -> Option<HostPortSpan<'_>> {
    let begin = url.find("//")? + 2;
    let rest = &url[begin..];
    let segment = &rest[..rest.find(SEGMENT_TERMINATORS).unwrap_or(rest.len())];
    let userinfo = segment.rfind('@').map_or(0, |at| at + 1);
    split_span(begin + userinfo, &segment[userinfo..])
}

/// Find the host:port of an Oracle service-name body (`//host:port/service`).
///
/// `body_start` is the offset of the leading `//` within the full URL. The
/// returned flag tells whether a `/service` part follows the port.
pub(crate) fn service_name_span(url: &str, body_start: usize) -> Option<(HostPortSpan<'_>, bool)> {
    let begin = body_start + 2;
    let rest = url.get(begin..)?;
    let (len, has_service) = match rest.find('/') {
        Some(slash) => (slash, true),
        None => (rest.len(), false),
    };
    split_span(begin, &rest[..len]).map(|span| (span, has_service))
}

/// Split `[v6]:port` or `host:port` found at `start`
fn split_span(start: usize, segment: &str) -> Option<HostPortSpan<'_>> {
    let (host, port) = match segment.strip_prefix('[') {
        Some(inner) => {
            let (host, after) = inner.split_once(']')?;
            (host, after.strip_prefix(':')?)
        }
        None => segment.split_once(':')?,
    };
    Some(HostPortSpan {
        start,
        end: start + segment.len(),
        host,
        port,
    })
}
