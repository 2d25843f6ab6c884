//! Syntax checks for addresses and names used in the configuration.
//!
//! Each check returns `Err(message)` describing why the input was rejected;
//! the validator turns that message into a [`FieldError`](super::field::FieldError).

use regex::Regex;
use std::net::IpAddr;
use std::sync::LazyLock;

/// Maximum length of a DNS-1123 subdomain.
pub const DNS1123_SUBDOMAIN_MAX_LEN: usize = 253;

static DNS1123_SUBDOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("valid regex")
});

/// Checks that `value` is an IPv4 or IPv6 address.
///
/// # Errors
///
/// Returns a message naming the rejected value.
pub fn ip(value: &str) -> Result<IpAddr, String> {
    value
        .parse::<IpAddr>()
        .map_err(|_| format!("{value:?} is not a valid IP"))
}

/// Checks that `value` is a 48-bit hardware address.
///
/// Accepts `00:11:22:33:44:55`, `00-11-22-33-44-55` and `0011.2233.4455`,
/// with hex digits in either case.
///
/// # Errors
///
/// Returns a message naming the rejected value.
pub fn mac(value: &str) -> Result<[u8; 6], String> {
    parse_mac(value).ok_or_else(|| format!("address {value}: invalid MAC address"))
}

fn parse_mac(value: &str) -> Option<[u8; 6]> {
    let mut out = [0u8; 6];

    if value.len() == 17 {
        let sep = value.as_bytes()[2];
        if sep != b':' && sep != b'-' {
            return None;
        }
        let groups: Vec<&str> = value.split(char::from(sep)).collect();
        if groups.len() != 6 {
            return None;
        }
        for (byte, group) in out.iter_mut().zip(groups) {
            *byte = parse_hex_byte(group)?;
        }
        return Some(out);
    }

    if value.len() == 14 {
        let groups: Vec<&str> = value.split('.').collect();
        if groups.len() != 3 {
            return None;
        }
        for (pair, group) in out.chunks_mut(2).zip(groups) {
            if group.len() != 4 {
                return None;
            }
            pair[0] = parse_hex_byte(group.get(0..2)?)?;
            pair[1] = parse_hex_byte(group.get(2..4)?)?;
        }
        return Some(out);
    }

    None
}

fn parse_hex_byte(group: &str) -> Option<u8> {
    if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(group, 16).ok()
}

/// Checks that `value` is a DNS-1123 subdomain.
///
/// When `accept_trailing_dot` is set, a single trailing `.` (fully
/// qualified form) is ignored.
///
/// # Errors
///
/// Returns a message describing the first rule the name breaks.
pub fn domain_name(value: &str, accept_trailing_dot: bool) -> Result<(), String> {
    let name = if accept_trailing_dot {
        value.strip_suffix('.').unwrap_or(value)
    } else {
        value
    };

    if name.len() > DNS1123_SUBDOMAIN_MAX_LEN {
        return Err(format!(
            "must be no more than {DNS1123_SUBDOMAIN_MAX_LEN} characters"
        ));
    }

    if !DNS1123_SUBDOMAIN_RE.is_match(name) {
        return Err(
            "a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, \
             '-' or '.', and must start and end with an alphanumeric character"
                .to_string(),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_accepts_v4_and_v6() {
        assert!(ip("192.168.1.5").is_ok());
        assert!(ip("fd00::1").is_ok());
        assert!(ip("::ffff:10.0.0.1").is_ok());
    }

    #[test]
    fn test_ip_rejects_garbage() {
        assert!(ip("").is_err());
        assert!(ip("192.168.1").is_err());
        assert!(ip("256.0.0.1").is_err());
        assert!(ip("your-node0-ip").unwrap_err().contains("your-node0-ip"));
    }

    #[test]
    fn test_mac_colon_and_hyphen_forms() {
        assert_eq!(
            mac("AA:bb:CC:dd:EE:ff").unwrap(),
            [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]
        );
        assert_eq!(
            mac("00-11-22-33-44-55").unwrap(),
            [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]
        );
    }

    #[test]
    fn test_mac_dot_form() {
        assert_eq!(
            mac("0011.2233.4455").unwrap(),
            [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]
        );
    }

    #[test]
    fn test_mac_rejects_malformed() {
        for bad in [
            "",
            "00:11:22:33:44",
            "00:11:22:33:44:55:66",
            "00:11-22:33:44:55",
            "00:11:22:33:44:gg",
            "0:011:22:33:44:55",
            "001122334455",
            "0011.2233.44555",
            "00:11:22:33:44:5é",
        ] {
            assert!(mac(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_domain_name_valid() {
        assert!(domain_name("pool.ntp.org", true).is_ok());
        assert!(domain_name("ntp1", true).is_ok());
        assert!(domain_name("time.example.com.", true).is_ok());
        assert!(domain_name("10.0.0.1", true).is_ok());
    }

    #[test]
    fn test_domain_name_invalid() {
        assert!(domain_name("not_a_domain_or_ip!!", true).is_err());
        assert!(domain_name("Upper.Case", true).is_err());
        assert!(domain_name("-leading.example.com", true).is_err());
        assert!(domain_name("", true).is_err());
        assert!(domain_name("time.example.com.", false).is_err());
    }

    #[test]
    fn test_domain_name_too_long() {
        let long = "a".repeat(DNS1123_SUBDOMAIN_MAX_LEN + 1);
        assert!(domain_name(&long, true).unwrap_err().contains("253"));
    }
}
