//! Host header parsing.
//!
//! Only the port is stripped here. Case is preserved: the resolver decides
//! which comparisons are case-insensitive.

/// Strip an optional trailing `:<port>` from a `Host` header value.
///
/// Bracketed IPv6 literals keep their brackets (`[::1]:3000` → `[::1]`).
/// A bare IPv6 literal without brackets is returned unchanged, since its
/// last colon is not a port separator.
pub fn strip_port(host_header: &str) -> &str {
    let Some((name, port)) = host_header.rsplit_once(':') else {
        return host_header;
    };

    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return host_header;
    }

    if name.contains(':') && !name.ends_with(']') {
        return host_header;
    }

    name
}
