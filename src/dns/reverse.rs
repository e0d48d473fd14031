//! Reverse-lookup name synthesis.

use std::net::IpAddr;

use hickory_resolver::proto::rr::Name;

use crate::error_handling::LookupError;

/// Builds the PTR query name for an IP address given as text.
///
/// IPv4 `192.0.2.1` becomes `1.2.0.192.in-addr.arpa.`; IPv6 addresses expand
/// to 32 reversed nibbles under `ip6.arpa.`.
///
/// # Errors
///
/// Returns `LookupError::NotAnAddress` if `host` is not an IP address.
pub fn reverse_name(host: &str) -> Result<String, LookupError> {
    host.parse::<IpAddr>()
        .map(|ip| Name::from(ip).to_string())
        .map_err(|_| LookupError::NotAnAddress(host.to_string()))
}
