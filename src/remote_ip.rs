//! Client IP extraction for callers behind a reverse proxy.

/// Picks the client IP to report to the verification endpoint.
///
/// Prefers the first entry of a forwarded-for header value over the raw
/// peer address, falling back to the peer address when the header is
/// absent or blank. Extracting the header itself from the inbound request
/// is the caller's responsibility.
#[must_use]
pub fn client_ip<'a>(forwarded_for: Option<&'a str>, peer_addr: &'a str) -> &'a str {
    forwarded_for
        .and_then(|header| header.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or(peer_addr)
}
