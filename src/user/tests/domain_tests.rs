//! Unit tests for user domain value types.

use crate::user::domain::{EmailAddress, PasswordHash, UserDomainError};
use eyre::{Result, ensure};
use rstest::rstest;

#[rstest]
#[case("kim@example.com")]
#[case("  KIM@Example.COM  ")]
#[case("first.last@sub.domain.org")]
fn email_accepts_plausible_addresses(#[case] raw: &str) -> Result<()> {
    let email = EmailAddress::new(raw)?;
    ensure!(
        email.as_str() == email.as_str().to_ascii_lowercase(),
        "expected lowercase normalization"
    );
    Ok(())
}

#[rstest]
fn email_normalizes_case_for_lookup_equality() -> Result<()> {
    let upper = EmailAddress::new("KIM@EXAMPLE.COM")?;
    let lower = EmailAddress::new("kim@example.com")?;
    ensure!(upper == lower, "case must not distinguish addresses");
    Ok(())
}

#[rstest]
#[case("")]
#[case("plainaddress")]
#[case("@example.com")]
#[case("kim@")]
#[case("kim@nodot")]
#[case("kim@@example.com")]
#[case("kim smith@example.com")]
#[case("kim@exa mple.com")]
fn email_rejects_malformed_addresses(#[case] raw: &str) {
    assert!(matches!(
        EmailAddress::new(raw),
        Err(UserDomainError::InvalidEmail(_))
    ));
}

#[rstest]
fn password_hash_round_trips_through_storage() -> Result<()> {
    let hash = PasswordHash::from_parts("abcd", "0123");

    let restored = PasswordHash::from_stored(hash.as_str().to_owned())?;
    ensure!(restored == hash, "storage round trip must preserve value");
    ensure!(
        restored.parts() == Some(("abcd", "0123")),
        "parts must split on the separator"
    );
    Ok(())
}

#[rstest]
fn password_hash_rejects_values_without_separator() {
    assert_eq!(
        PasswordHash::from_stored("deadbeef"),
        Err(UserDomainError::MalformedPasswordHash)
    );
}

#[rstest]
fn password_hash_debug_hides_the_digest() {
    let hash = PasswordHash::from_parts("abcd", "0123");
    let rendered = format!("{hash:?}");
    assert!(!rendered.contains("0123"));
}
