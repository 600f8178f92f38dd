// Domain module tests.

use super::*;

#[test]
fn test_registrable_domain_basic() {
    assert_eq!(registrable_domain("example.com").unwrap(), "example.com");
}

#[test]
fn test_registrable_domain_strips_subdomains() {
    assert_eq!(registrable_domain("www.example.com").unwrap(), "example.com");
    assert_eq!(registrable_domain("a.b.c.example.com").unwrap(), "example.com");
}

#[test]
fn test_registrable_domain_multi_part_suffix() {
    assert_eq!(
        registrable_domain("www.example.co.uk").unwrap(),
        "example.co.uk"
    );
}

#[test]
fn test_registrable_domain_normalizes_case_and_trailing_dot() {
    assert_eq!(registrable_domain("WWW.Example.COM.").unwrap(), "example.com");
}

#[test]
fn test_registrable_domain_rejects_ip_addresses() {
    assert!(registrable_domain("192.168.1.1").is_err());
    assert!(registrable_domain("[::1]").is_err());
}

#[test]
fn test_registrable_domain_rejects_bare_suffix() {
    assert!(registrable_domain("co.uk").is_err());
    assert!(registrable_domain("").is_err());
}
