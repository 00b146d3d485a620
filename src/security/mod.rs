// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{Result, TnccError};

const FORBIDDEN_HOST_CHARS: &[char] = &['/', '\\', '?', '#', '@'];

/// Validate the VPN host argument before it is interpolated into a URL and
/// handed to the host checker. Accepts `name`, `name:port`, `[ipv6]` and
/// `[ipv6]:port`.
pub fn validate_host(host: &str) -> Result<()> {
    let invalid = |reason: &str| TnccError::InvalidHost {
        host: host.to_string(),
        reason: reason.to_string(),
    };

    if host.is_empty() {
        return Err(invalid("host name is empty"));
    }

    if host.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid("host name contains whitespace"));
    }

    if let Some(c) = host.chars().find(|c| FORBIDDEN_HOST_CHARS.contains(c)) {
        return Err(invalid(&format!(
            "unexpected '{c}'; pass a host name, not a URL"
        )));
    }

    let port = if let Some(rest) = host.strip_prefix('[') {
        // Bracketed IPv6 literal, optionally followed by a port
        let Some((address, after)) = rest.split_once(']') else {
            return Err(invalid("unterminated '[' in IPv6 address"));
        };
        let is_ipv6_char = |c: char| c.is_ascii_hexdigit() || c == ':' || c == '.';
        if address.is_empty() || !address.chars().all(is_ipv6_char) || address.contains("..") {
            return Err(invalid("malformed IPv6 address"));
        }
        match after.strip_prefix(':') {
            Some(port) => Some(port),
            None if after.is_empty() => None,
            None => return Err(invalid("unexpected text after ']'")),
        }
    } else {
        if host.contains(['[', ']']) {
            return Err(invalid("IPv6 addresses must be written as '[address]'"));
        }
        let (name, port) = match host.split_once(':') {
            Some((name, port)) => (name, Some(port)),
            None => (host, None),
        };
        if name.is_empty() {
            return Err(invalid("host name is empty"));
        }
        if port.is_some_and(|p| p.contains(':')) {
            return Err(invalid(
                "too many ':'; write IPv6 addresses as '[address]' or '[address]:port'",
            ));
        }
        if name.starts_with('.') || name.contains("..") {
            return Err(invalid("host name contains an empty label"));
        }
        port
    };

    if let Some(port) = port {
        if port.parse::<u16>().is_err() {
            return Err(invalid(&format!("invalid port '{port}'")));
        }
    }

    Ok(())
}

pub fn verify_https_security(url: &str) -> Result<()> {
    if !url.starts_with("https://") {
        return Err(TnccError::SecurityError(format!(
            "Insecure URL: {url}. Only HTTPS URLs are allowed for tncc.jar downloads"
        )));
    }

    if url.contains("..") {
        return Err(TnccError::SecurityError(format!(
            "Suspicious URL detected: {url}"
        )));
    }

    Ok(())
}

pub fn audit_log(action: &str, details: &str) {
    log::info!("SECURITY AUDIT: {action} - {details}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_host_accepts_names_and_ports() {
        assert!(validate_host("vpn.example.com").is_ok());
        assert!(validate_host("vpn.example.com:8443").is_ok());
        assert!(validate_host("10.0.0.1").is_ok());
        assert!(validate_host("[2001:db8::1]").is_ok());
        assert!(validate_host("[2001:db8::1]:8443").is_ok());
        assert!(validate_host("vpn.example.com.").is_ok());
    }

    #[test]
    fn test_validate_host_rejects_urls_and_junk() {
        for host in [
            "",
            "https://vpn.example.com",
            "vpn.example.com/dana-na",
            "user@vpn.example.com",
            "vpn example.com",
            "vpn.example.com:https",
            ":443",
            "2001:db8::1",
            "vpn.example.com:443:443",
            "[::1",
            "[]",
            "[..]",
            "[::1]8443",
            "[::1]:port",
            "vpn..example.com",
            ".vpn.example.com",
            "vpn]example.com",
        ] {
            let err = validate_host(host).unwrap_err();
            assert!(
                matches!(err, TnccError::InvalidHost { .. }),
                "expected InvalidHost for {host:?}"
            );
        }
    }

    #[test]
    fn test_verify_https_security() {
        assert!(verify_https_security("https://vpn.example.com/dana-cached/hc/tncc.jar").is_ok());
        assert!(matches!(
            verify_https_security("http://vpn.example.com/dana-cached/hc/tncc.jar"),
            Err(TnccError::SecurityError(_))
        ));
        assert!(matches!(
            verify_https_security("https://vpn.example.com/../etc/passwd"),
            Err(TnccError::SecurityError(_))
        ));
    }
}
