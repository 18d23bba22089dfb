// src/services/domain.rs
//! Hostname normalization and DNS resolution.
//!
//! User input arrives in every shape imaginable (`WWW.Example.COM/path`,
//! `https://example.com?x=1`, ` example.com `), so everything is funnelled
//! through the URL parser and reduced to a bare, lowercase hostname before any
//! network work happens.

use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::{Host, Url};

/// Reduces free-form domain or URL text to a bare hostname.
///
/// Returns `None` when no host can be parsed out of the input.
pub fn normalize_domain(input: &str) -> Option<String> {
    let input = input.trim().to_lowercase();

    let with_scheme = if input.starts_with("http://") || input.starts_with("https://") {
        input
    } else {
        format!("https://{}", input)
    };

    let parsed = Url::parse(&with_scheme).ok()?;
    let host = match parsed.host()? {
        Host::Domain(domain) => domain.to_string(),
        // the parser rewrites "12345" or "0x7f000001" into dotted form, so keep
        // the host exactly as typed for the format check
        Host::Ipv4(_) => raw_host(&with_scheme)?.to_string(),
        Host::Ipv6(addr) => addr.to_string(),
    };

    let host = host.strip_prefix("www.").unwrap_or(&host).to_string();

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Host text of an `http(s)://` URL before any address canonicalization
fn raw_host(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let authority = rest
        .split(|c: char| matches!(c, '/' | '?' | '#' | '\\'))
        .next()?;
    let host_port = authority.rsplit('@').next()?;
    let host = host_port.split(':').next()?;

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// A hostname is only worth resolving if it has at least one label separator
pub fn has_domain_format(domain: &str) -> bool {
    !domain.is_empty() && domain.contains('.')
}

#[derive(Debug, Error)]
pub enum DnsError {
    #[error("lookup failed: {0}")]
    Lookup(#[from] std::io::Error),

    #[error("no addresses returned")]
    NoAddresses,

    #[error("lookup timed out after {0:?}")]
    TimedOut(Duration),
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, DnsError>;
}

/// Resolver backed by the operating system's resolver through tokio
#[derive(Debug, Clone, Default)]
pub struct SystemResolver {
    timeout: Option<Duration>,
}

impl SystemResolver {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    async fn lookup(domain: &str) -> Result<Vec<IpAddr>, DnsError> {
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((domain, 0))
            .await?
            .map(|addr| addr.ip())
            .collect();

        if addrs.is_empty() {
            return Err(DnsError::NoAddresses);
        }
        Ok(addrs)
    }
}

#[async_trait]
impl DnsResolver for SystemResolver {
    async fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, DnsError> {
        let addrs = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, Self::lookup(domain))
                .await
                .map_err(|_| DnsError::TimedOut(limit))??,
            None => Self::lookup(domain).await?,
        };

        debug!(domain = %domain, addresses = addrs.len(), "DNS lookup succeeded");
        Ok(addrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_scheme_path_and_www() {
        assert_eq!(
            normalize_domain("WWW.Example.COM/path"),
            Some("example.com".to_string())
        );
        assert_eq!(
            normalize_domain("https://www.mit.edu/about?ref=home#top"),
            Some("mit.edu".to_string())
        );
        assert_eq!(
            normalize_domain("  http://Sub.Example.org:8443/  "),
            Some("sub.example.org".to_string())
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_domain("example.com").unwrap();
        assert_eq!(once, "example.com");
        assert_eq!(normalize_domain(&once), Some(once.clone()));
    }

    #[test]
    fn test_normalize_strips_single_www_only() {
        assert_eq!(
            normalize_domain("www.www.example.com"),
            Some("www.example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_rejects_hostless_input() {
        assert_eq!(normalize_domain(""), None);
        assert_eq!(normalize_domain("   "), None);
        assert_eq!(normalize_domain("https://"), None);
        assert_eq!(normalize_domain("http://exa mple.com"), None);
    }

    #[test]
    fn test_domain_format() {
        assert!(has_domain_format("example.com"));
        assert!(!has_domain_format("localhost"));
        assert!(!has_domain_format(""));
    }

    #[tokio::test]
    async fn test_system_resolver_resolves_literal_address() {
        let resolver = SystemResolver::new(None);
        let addrs = resolver.resolve("127.0.0.1").await.unwrap();
        assert_eq!(addrs, vec!["127.0.0.1".parse::<IpAddr>().unwrap()]);
    }

    #[test]
    fn test_numeric_hosts_keep_typed_form() {
        assert_eq!(normalize_domain("12345"), Some("12345".to_string()));
        assert_eq!(
            normalize_domain("http://0x7F000001/path"),
            Some("0x7f000001".to_string())
        );
        assert_eq!(normalize_domain("2130706433"), Some("2130706433".to_string()));
        assert_eq!(normalize_domain("user@1.2:80"), Some("1.2".to_string()));
        assert_eq!(
            normalize_domain("https://192.168.0.1/"),
            Some("192.168.0.1".to_string())
        );
        assert!(!has_domain_format("12345"));
        assert!(!has_domain_format("0x7f000001"));
    }

    #[tokio::test]
    #[ignore = "depends on the host's DNS configuration"]
    async fn test_system_resolver_fails_for_reserved_tld() {
        let resolver = SystemResolver::new(Some(Duration::from_secs(10)));
        assert!(resolver.resolve("no-such-host.invalid").await.is_err());
    }
}
