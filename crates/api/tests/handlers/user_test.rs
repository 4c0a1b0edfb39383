use axum::Json;
use chrono::Utc;
use mockall::predicate;
use std::str::FromStr;
use uuid::Uuid;

use dronedock_core::{
    errors::RentalError,
    models::user::{LoginRequest, LoginResponse, RegisterRequest, UserRole},
};
use dronedock_db::models::DbUser;

use crate::test_utils::TestContext;
use dronedock_api::middleware::{auth, error_handling::AppError};

fn register_request() -> RegisterRequest {
    RegisterRequest {
        name: "Asha Patel".to_string(),
        email: "asha@example.com".to_string(),
        password: "hunter2hunter2".to_string(),
        city: "Pune".to_string(),
        role: UserRole::Owner,
    }
}

async fn register_wrapper(
    ctx: &mut TestContext,
    request: RegisterRequest,
) -> Result<Json<DbUser>, AppError> {
    request.validate()?;

    let password_hash = auth::hash_password(&request.password)?;

    let user = ctx
        .user_repo
        .create_user(
            request.name,
            request.email,
            password_hash,
            request.role.as_str().to_string(),
            request.city,
        )
        .await?
        .ok_or_else(|| RentalError::Validation("Email is already registered".to_string()))?;

    Ok(Json(user))
}

async fn login_wrapper(
    ctx: &mut TestContext,
    request: LoginRequest,
    secret: &str,
) -> Result<Json<LoginResponse>, AppError> {
    let user = ctx
        .user_repo
        .get_user_by_email(request.email)
        .await?
        .ok_or_else(|| RentalError::Authentication("Invalid email or password".to_string()))?;

    if !auth::verify_password(&request.password, &user.password_hash)? {
        return Err(AppError(RentalError::Authentication(
            "Invalid email or password".to_string(),
        )));
    }

    let token = auth::issue_token(user.id, secret, 1)?;

    Ok(Json(LoginResponse {
        token,
        role: UserRole::from_str(&user.role)?,
    }))
}

#[tokio::test]
async fn test_register_success() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let now = Utc::now();

    ctx.user_repo
        .expect_create_user()
        .with(
            predicate::eq("Asha Patel".to_string()),
            predicate::eq("asha@example.com".to_string()),
            predicate::always(),
            predicate::eq("owner".to_string()),
            predicate::eq("Pune".to_string()),
        )
        .times(1)
        .returning(move |name, email, password_hash, role, city| {
            Ok(Some(DbUser {
                id: user_id,
                name,
                email,
                password_hash,
                role,
                city,
                created_at: now,
            }))
        });

    let result = register_wrapper(&mut ctx, register_request()).await;

    assert!(result.is_ok());
    let user = result.unwrap().0;
    assert_eq!(user.id, user_id);
    // The stored hash is never the raw password
    assert_ne!(user.password_hash, "hunter2hunter2");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let mut ctx = TestContext::new();

    // The unique email index reports the duplicate as an empty insert
    ctx.user_repo
        .expect_create_user()
        .times(1)
        .returning(|_, _, _, _, _| Ok(None));

    let result = register_wrapper(&mut ctx, register_request()).await;

    match result.unwrap_err().0 {
        RentalError::Validation(message) => {
            assert_eq!(message, "Email is already registered")
        }
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let mut ctx = TestContext::new();

    ctx.user_repo
        .expect_create_user()
        .times(0)
        .returning(|_, _, _, _, _| panic!("Should not be called"));

    let mut request = register_request();
    request.password = "short".to_string();

    let result = register_wrapper(&mut ctx, request).await;

    match result.unwrap_err().0 {
        RentalError::Validation(_) => {}
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_login_round_trip() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let secret = "test-secret";
    let password_hash = auth::hash_password("hunter2hunter2").unwrap();
    let now = Utc::now();

    ctx.user_repo
        .expect_get_user_by_email()
        .with(predicate::eq("asha@example.com".to_string()))
        .returning(move |email| {
            Ok(Some(DbUser {
                id: user_id,
                name: "Asha Patel".to_string(),
                email,
                password_hash: password_hash.clone(),
                role: "owner".to_string(),
                city: "Pune".to_string(),
                created_at: now,
            }))
        });

    let request = LoginRequest {
        email: "asha@example.com".to_string(),
        password: "hunter2hunter2".to_string(),
    };

    let response = login_wrapper(&mut ctx, request, secret).await.unwrap().0;

    assert_eq!(response.role, UserRole::Owner);
    // The issued token resolves back to the user
    let resolved = auth::verify_token(&response.token, secret).unwrap();
    assert_eq!(resolved, user_id);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let mut ctx = TestContext::new();
    let password_hash = auth::hash_password("hunter2hunter2").unwrap();
    let now = Utc::now();

    ctx.user_repo
        .expect_get_user_by_email()
        .returning(move |email| {
            Ok(Some(DbUser {
                id: Uuid::new_v4(),
                name: "Asha Patel".to_string(),
                email,
                password_hash: password_hash.clone(),
                role: "owner".to_string(),
                city: "Pune".to_string(),
                created_at: now,
            }))
        });

    let request = LoginRequest {
        email: "asha@example.com".to_string(),
        password: "wrong-password".to_string(),
    };

    let result = login_wrapper(&mut ctx, request, "test-secret").await;

    match result.unwrap_err().0 {
        RentalError::Authentication(_) => {}
        e => panic!("Expected Authentication error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_login_unknown_email() {
    let mut ctx = TestContext::new();

    ctx.user_repo
        .expect_get_user_by_email()
        .returning(|_| Ok(None));

    let request = LoginRequest {
        email: "nobody@example.com".to_string(),
        password: "hunter2hunter2".to_string(),
    };

    let result = login_wrapper(&mut ctx, request, "test-secret").await;

    match result.unwrap_err().0 {
        RentalError::Authentication(_) => {}
        e => panic!("Expected Authentication error, got: {:?}", e),
    }
}
