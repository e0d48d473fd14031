//! DNS resolver initialization.
//!
//! This module builds the hickory-backed record source from the resolver
//! settings: either an explicit nameserver list or the system configuration.

use std::net::IpAddr;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::config::{ResolverSettings, DNS_PORT};
use crate::dns::HickorySource;

/// Initializes the record source used for all lookups.
///
/// With explicit nameservers, each address is queried on port 53 over UDP
/// with TCP fallback. Otherwise the system configuration (`/etc/resolv.conf`
/// or the platform equivalent) is used. If that cannot be read, hickory's
/// default configuration is used and a warning is logged.
///
/// Timeout and retry policy are the resolver's defaults. Answer caching is
/// turned off, so a host listed twice is queried twice.
pub fn init_resolver(settings: &ResolverSettings) -> HickorySource {
    let (config, opts) = resolver_config(settings);
    let nameservers = configured_nameservers(&config);
    HickorySource::new(TokioAsyncResolver::tokio(config, opts), nameservers)
}

fn resolver_config(settings: &ResolverSettings) -> (ResolverConfig, ResolverOpts) {
    let (config, mut opts) = match &settings.nameservers {
        Some(ips) => {
            let group = NameServerConfigGroup::from_ips_clear(ips, DNS_PORT, true);
            (
                ResolverConfig::from_parts(None, vec![], group),
                ResolverOpts::default(),
            )
        }
        None => read_system_conf().unwrap_or_else(|e| {
            log::warn!("Could not read system resolver configuration ({e}), using defaults");
            (ResolverConfig::default(), ResolverOpts::default())
        }),
    };
    opts.cache_size = 0;
    (config, opts)
}

/// Distinct nameserver addresses of `config`, in configuration order.
///
/// hickory lists each address once per protocol, so duplicates are dropped.
pub fn configured_nameservers(config: &ResolverConfig) -> Vec<IpAddr> {
    let mut ips: Vec<IpAddr> = Vec::new();
    for ns in config.name_servers() {
        let ip = ns.socket_addr.ip();
        if !ips.contains(&ip) {
            ips.push(ip);
        }
    }
    ips
}
