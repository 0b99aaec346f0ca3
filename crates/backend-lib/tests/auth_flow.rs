// crates/backend-lib/tests/auth_flow.rs
use std::sync::Arc;

use taskboard_backend_lib::auth::{AuthService, TokenKeys};
use taskboard_backend_lib::error::AppError;
use taskboard_backend_lib::storage::FlatFileStore;
use taskboard_common::{LoginRequest, RegisterRequest};
use tempfile::{tempdir, TempDir};

fn auth_service() -> (TempDir, AuthService<FlatFileStore>, Arc<TokenKeys>) {
    let dir = tempdir().unwrap();
    let store = Arc::new(FlatFileStore::new(dir.path()).unwrap());
    let keys = Arc::new(TokenKeys::new("test-secret"));
    let auth = AuthService::new(store, keys.clone());
    (dir, auth, keys)
}

fn register_request(username: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: Some(username.to_string()),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

#[tokio::test]
async fn test_register_then_login_roundtrip() {
    let (_dir, auth, keys) = auth_service();

    let registered = auth
        .register(register_request("alice", "a@x.com", "secret123"))
        .await
        .unwrap();
    assert_eq!(registered.username, "alice");
    assert_eq!(registered.email, "a@x.com");

    // The registration token embeds the new user's id
    assert_eq!(keys.verify(&registered.token).unwrap(), registered.id);

    // The same credentials log in immediately
    let logged_in = auth
        .login(login_request("a@x.com", "secret123"))
        .await
        .unwrap();
    assert_eq!(logged_in.id, registered.id);
    assert_eq!(keys.verify(&logged_in.token).unwrap(), registered.id);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let (_dir, auth, _) = auth_service();

    auth.register(register_request("alice", "a@x.com", "secret123"))
        .await
        .unwrap();

    // Same email, different username
    let err = auth
        .register(register_request("alice2", "a@x.com", "secret123"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateUser));
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let (_dir, auth, _) = auth_service();

    auth.register(register_request("alice", "a@x.com", "secret123"))
        .await
        .unwrap();

    // Same username, different email
    let err = auth
        .register(register_request("alice", "b@x.com", "secret123"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateUser));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (_dir, auth, _) = auth_service();

    auth.register(register_request("alice", "a@x.com", "secret123"))
        .await
        .unwrap();

    let wrong_password = auth
        .login(login_request("a@x.com", "wrong-password"))
        .await
        .unwrap_err();
    let unknown_email = auth
        .login(login_request("nobody@x.com", "secret123"))
        .await
        .unwrap_err();

    // No distinguishing signal between the two failure causes
    assert!(matches!(wrong_password, AppError::InvalidCredentials));
    assert!(matches!(unknown_email, AppError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert_eq!(
        wrong_password.status_code(),
        unknown_email.status_code()
    );
}

#[tokio::test]
async fn test_register_with_missing_fields_is_a_validation_error() {
    let (_dir, auth, _) = auth_service();

    let err = auth
        .register(RegisterRequest {
            username: Some("alice".to_string()),
            email: Some("a@x.com".to_string()),
            password: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = auth
        .register(RegisterRequest {
            username: Some("alice".to_string()),
            email: Some("not-an-email".to_string()),
            password: Some("secret123".to_string()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_stored_hash_is_not_the_plaintext() {
    let (dir, auth, _) = auth_service();

    auth.register(register_request("alice", "a@x.com", "secret123"))
        .await
        .unwrap();

    // Inspect the stored document directly
    let users_dir = dir.path().join("users");
    let entry = std::fs::read_dir(users_dir).unwrap().next().unwrap().unwrap();
    let content = std::fs::read_to_string(entry.path()).unwrap();
    assert!(!content.contains("secret123"));
    assert!(content.contains("password_hash"));
}
