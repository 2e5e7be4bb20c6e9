//! Visitor address resolution.
//!
//! The TCP peer is the visitor unless it is a configured trusted proxy, in
//! which case the forwarded client address is used instead.

use std::net::IpAddr;

use axum::http::HeaderMap;

/// Resolve the address to record for a request.
pub fn resolve(peer: IpAddr, headers: &HeaderMap, trusted_proxies: &[String]) -> IpAddr {
    if !is_trusted_proxy(&peer, trusted_proxies) {
        return peer;
    }
    forwarded_for(headers).unwrap_or(peer)
}

/// Whether `ip` matches any entry (single address or CIDR) of the list.
pub fn is_trusted_proxy(ip: &IpAddr, trusted_proxies: &[String]) -> bool {
    trusted_proxies.iter().any(|proxy| {
        if proxy.contains('/') {
            ip_in_cidr(ip, proxy)
        } else {
            proxy.parse::<IpAddr>().is_ok_and(|addr| addr == *ip)
        }
    })
}

pub fn ip_in_cidr(ip: &IpAddr, cidr: &str) -> bool {
    let Some((network, prefix_len)) = cidr.split_once('/') else {
        return false;
    };
    let Ok(prefix_len) = prefix_len.parse::<u32>() else {
        return false;
    };
    let Ok(network) = network.parse::<IpAddr>() else {
        return false;
    };

    match (ip, network) {
        (IpAddr::V4(ip), IpAddr::V4(net)) if prefix_len <= 32 => {
            let mask = u32::MAX.checked_shl(32 - prefix_len).unwrap_or(0);
            (u32::from(*ip) & mask) == (u32::from(net) & mask)
        }
        (IpAddr::V6(ip), IpAddr::V6(net)) if prefix_len <= 128 => {
            let mask = u128::MAX.checked_shl(128 - prefix_len).unwrap_or(0);
            (u128::from(*ip) & mask) == (u128::from(net) & mask)
        }
        _ => false,
    }
}

/// Left-most `X-Forwarded-For` entry, falling back to `X-Real-IP`.
fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    let from_xff = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse().ok());

    from_xff.or_else(|| {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    fn forwarded(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn untrusted_peer_is_used_as_is() {
        let headers = forwarded("203.0.113.7");
        assert_eq!(resolve(ip("198.51.100.1"), &headers, &[]), ip("198.51.100.1"));
    }

    #[test]
    fn trusted_proxy_forwards_first_address() {
        let headers = forwarded("203.0.113.7, 10.0.0.2");
        let trusted = vec!["10.0.0.0/8".to_string()];
        assert_eq!(resolve(ip("10.0.0.1"), &headers, &trusted), ip("203.0.113.7"));
    }

    #[test]
    fn trusted_proxy_without_header_falls_back_to_peer() {
        let trusted = vec!["127.0.0.1".to_string()];
        assert_eq!(
            resolve(ip("127.0.0.1"), &HeaderMap::new(), &trusted),
            ip("127.0.0.1")
        );
    }

    #[test]
    fn real_ip_header_is_second_choice() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("203.0.113.9"));
        let trusted = vec!["127.0.0.1".to_string()];
        assert_eq!(resolve(ip("127.0.0.1"), &headers, &trusted), ip("203.0.113.9"));
    }

    #[test]
    fn cidr_matching() {
        assert!(ip_in_cidr(&ip("192.168.1.20"), "192.168.1.0/24"));
        assert!(!ip_in_cidr(&ip("192.168.2.20"), "192.168.1.0/24"));
        assert!(ip_in_cidr(&ip("8.8.8.8"), "0.0.0.0/0"));
        assert!(ip_in_cidr(&ip("fd00::1"), "fc00::/7"));
        assert!(!ip_in_cidr(&ip("10.0.0.1"), "fc00::/7"));
        assert!(!ip_in_cidr(&ip("10.0.0.1"), "10.0.0.0/33"));
        assert!(!ip_in_cidr(&ip("10.0.0.1"), "garbage"));
    }
}
