use std::time::Duration;

use compass_auth::error::AuthError;
use compass_auth::jwt::{TokenIssuer, TokenVerifier, bearer_token};

const SECRET: &[u8] = b"test-secret-with-enough-length-for-hs256";

#[test]
fn issued_token_verifies() {
    let issuer = TokenIssuer::new(SECRET, Some("compass"));
    let verifier = TokenVerifier::new(SECRET, Some("compass"));

    let token = issuer
        .issue("user-1", Some("a@example.com"), Duration::from_secs(300))
        .unwrap();
    let claims = verifier.verify(&token).unwrap();

    assert_eq!(claims.sub, "user-1");
    assert_eq!(claims.email.as_deref(), Some("a@example.com"));
}

#[test]
fn wrong_secret_is_rejected() {
    let token = TokenIssuer::new(b"another-secret-entirely-different", None)
        .issue("user-1", None, Duration::from_secs(300))
        .unwrap();
    let err = TokenVerifier::new(SECRET, None).verify(&token).unwrap_err();
    assert!(matches!(err, AuthError::Jwt(_)));
}

#[test]
fn wrong_issuer_is_rejected() {
    let token = TokenIssuer::new(SECRET, Some("someone-else"))
        .issue("user-1", None, Duration::from_secs(300))
        .unwrap();
    assert!(TokenVerifier::new(SECRET, Some("compass")).verify(&token).is_err());
}

#[test]
fn expired_token_is_reported_as_expired() {
    let token = TokenIssuer::new(SECRET, None)
        .issue("user-1", None, Duration::ZERO)
        .unwrap();
    std::thread::sleep(Duration::from_millis(1100));
    let err = TokenVerifier::new(SECRET, None).verify(&token).unwrap_err();
    assert!(matches!(err, AuthError::TokenExpired));
}

#[test]
fn bearer_header_parsing() {
    assert_eq!(bearer_token("Bearer abc.def").unwrap(), "abc.def");
    assert!(matches!(bearer_token("Bearer "), Err(AuthError::MissingToken)));
    assert!(matches!(bearer_token("Basic abc"), Err(AuthError::MissingToken)));
}
