#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pullshield_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
cache:
  ttl_secz: 60 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.cache.ttl_secs, 10_800);
    assert_eq!(cfg.upstream.base, "https://github.com");
    assert_eq!(cfg.badge.label, "Docker Pulls");
}

#[test]
fn version_must_be_one() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn cache_ttl_range_is_enforced() {
    let bad = r#"
version: 1
cache:
  ttl_secs: 999999999
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn upstream_base_must_be_http() {
    let bad = r#"
version: 1
upstream:
  base: "ftp://github.com"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn public_base_is_validated_when_present() {
    let ok = r#"
version: 1
gateway:
  public_base: "https://pulls.example.com"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(
        cfg.gateway.public_base.as_deref(),
        Some("https://pulls.example.com")
    );

    let bad = r#"
version: 1
gateway:
  public_base: "not a url"
"#;
    config::load_from_str(bad).expect_err("must fail");
}
