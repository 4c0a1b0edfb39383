use uuid::Uuid;

use dronedock_api::middleware::{auth, error_handling::map_error};
use dronedock_core::errors::RentalError;

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = RentalError::NotFound("Drone not found".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = RentalError::Validation("Invalid input".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    let error = RentalError::Authentication("Invalid token".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_authorization() {
    let error = RentalError::Authorization("Not the owner".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let error = RentalError::Conflict("Slot already booked".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = RentalError::Database(eyre::eyre!("Database error"));

    let response = map_error(error);

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = RentalError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = map_error(error);

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_hash_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    // The hash is a salted PHC string, not the raw password
    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$argon2"));
}

#[tokio::test]
async fn test_verify_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    assert!(auth::verify_password(password, &hashed).unwrap());
    assert!(!auth::verify_password("wrong_password", &hashed).unwrap());
}

#[tokio::test]
async fn test_token_round_trip() {
    let user_id = Uuid::new_v4();
    let secret = "test-secret";

    let token = auth::issue_token(user_id, secret, 1).unwrap();
    let resolved = auth::verify_token(&token, secret).unwrap();

    assert_eq!(resolved, user_id);
}

#[tokio::test]
async fn test_token_rejects_wrong_secret() {
    let user_id = Uuid::new_v4();

    let token = auth::issue_token(user_id, "right-secret", 1).unwrap();
    let result = auth::verify_token(&token, "wrong-secret");

    match result.unwrap_err() {
        RentalError::Authentication(_) => {}
        e => panic!("Expected Authentication error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_token_rejects_garbage() {
    let result = auth::verify_token("not-a-jwt", "secret");

    match result.unwrap_err() {
        RentalError::Authentication(_) => {}
        e => panic!("Expected Authentication error, got: {:?}", e),
    }
}

#[test]
fn test_extract_token_accepts_both_header_forms() {
    assert_eq!(auth::extract_token("Bearer abc123"), "abc123");
    assert_eq!(auth::extract_token("abc123"), "abc123");
}
