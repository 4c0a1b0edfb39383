use axum::Json;
use chrono::{NaiveDate, Utc};
use mockall::predicate;
use std::str::FromStr;
use uuid::Uuid;

use dronedock_core::{
    errors::RentalError,
    models::drone::{CreateDroneRequest, DroneListResponse, DroneResponse, DroneSummary},
};
use dronedock_db::models::DbDrone;

use crate::test_utils::TestContext;
use dronedock_api::middleware::error_handling::AppError;

fn date(s: &str) -> NaiveDate {
    NaiveDate::from_str(s).unwrap()
}

fn valid_request() -> CreateDroneRequest {
    CreateDroneRequest {
        name: "Sprayer One".to_string(),
        drone_type: "crop-sprayer".to_string(),
        capacity: 10,
        price_per_acre: 450.0,
        durability: 8,
        purchased_date: date("2023-11-20"),
        is_ngo: false,
        ngo_name: None,
    }
}

async fn add_drone_wrapper(
    ctx: &mut TestContext,
    caller_id: Uuid,
    request: CreateDroneRequest,
) -> Result<Json<DroneResponse>, AppError> {
    request.validate()?;

    let drone = ctx
        .drone_repo
        .create_drone(
            caller_id,
            request.name,
            request.drone_type,
            request.capacity,
            request.price_per_acre,
            request.durability,
            request.purchased_date,
            request.is_ngo,
            request.ngo_name,
        )
        .await?;

    Ok(Json(DroneResponse {
        id: drone.id,
        owner_id: drone.owner_id,
        name: drone.name,
        drone_type: drone.drone_type,
        capacity: drone.capacity,
        price_per_acre: drone.price_per_acre,
        durability: drone.durability,
        purchased_date: drone.purchased_date,
        is_ngo: drone.is_ngo,
        ngo_name: drone.ngo_name,
        created_at: drone.created_at,
    }))
}

async fn get_all_drones_wrapper(
    ctx: &mut TestContext,
) -> Result<Json<DroneListResponse>, AppError> {
    let drones = ctx.drone_repo.get_all_drones().await?;

    Ok(Json(DroneListResponse {
        drones: drones
            .into_iter()
            .map(|drone| DroneSummary {
                id: drone.id,
                name: drone.name,
                drone_type: drone.drone_type,
                capacity: drone.capacity,
                price_per_acre: drone.price_per_acre,
                durability: drone.durability,
            })
            .collect(),
    }))
}

#[tokio::test]
async fn test_add_drone_success() {
    let mut ctx = TestContext::new();
    let caller_id = Uuid::new_v4();
    let drone_id = Uuid::new_v4();
    let now = Utc::now();

    ctx.drone_repo
        .expect_create_drone()
        .with(
            predicate::eq(caller_id),
            predicate::eq("Sprayer One".to_string()),
            predicate::always(),
            predicate::eq(10),
            predicate::always(),
            predicate::eq(8),
            predicate::always(),
            predicate::eq(false),
            predicate::always(),
        )
        .times(1)
        .returning(
            move |owner_id,
                  name,
                  drone_type,
                  capacity,
                  price_per_acre,
                  durability,
                  purchased_date,
                  is_ngo,
                  ngo_name| {
                Ok(DbDrone {
                    id: drone_id,
                    owner_id,
                    name,
                    drone_type,
                    capacity,
                    price_per_acre,
                    durability,
                    purchased_date,
                    is_ngo,
                    ngo_name,
                    created_at: now,
                })
            },
        );

    let result = add_drone_wrapper(&mut ctx, caller_id, valid_request()).await;

    assert!(result.is_ok());
    let response = result.unwrap().0;
    assert_eq!(response.id, drone_id);
    assert_eq!(response.owner_id, caller_id);
    assert_eq!(response.name, "Sprayer One");
}

#[tokio::test]
async fn test_add_drone_rejects_invalid_specs() {
    let mut ctx = TestContext::new();
    let caller_id = Uuid::new_v4();

    // Invalid specs never reach the registry
    ctx.drone_repo
        .expect_create_drone()
        .times(0)
        .returning(|_, _, _, _, _, _, _, _, _| panic!("Should not be called"));

    let mut request = valid_request();
    request.is_ngo = true; // NGO flag without an NGO name

    let result = add_drone_wrapper(&mut ctx, caller_id, request).await;

    match result.unwrap_err().0 {
        RentalError::Validation(_) => {}
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_get_drone_details_not_found() {
    let mut ctx = TestContext::new();
    let drone_id = Uuid::new_v4();

    ctx.drone_repo
        .expect_get_drone_by_id()
        .with(predicate::eq(drone_id))
        .returning(|_| Ok(None));

    let result = ctx.drone_repo.get_drone_by_id(drone_id).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_all_drones_projection() {
    let mut ctx = TestContext::new();
    let owner_id = Uuid::new_v4();
    let now = Utc::now();

    ctx.drone_repo.expect_get_all_drones().returning(move || {
        Ok(vec![DbDrone {
            id: Uuid::new_v4(),
            owner_id,
            name: "Sprayer One".to_string(),
            drone_type: "crop-sprayer".to_string(),
            capacity: 10,
            price_per_acre: 450.0,
            durability: 8,
            purchased_date: date("2023-11-20"),
            is_ngo: true,
            ngo_name: Some("Green Fields Trust".to_string()),
            created_at: now,
        }])
    });

    let result = get_all_drones_wrapper(&mut ctx).await.unwrap().0;

    assert_eq!(result.drones.len(), 1);

    // The discovery listing exposes only the public fields
    let value = serde_json::to_value(&result.drones[0]).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("name"));
    assert!(object.contains_key("pricePerAcre"));
    assert!(!object.contains_key("ownerId"));
    assert!(!object.contains_key("ngoName"));
}

#[tokio::test]
async fn test_get_owner_drones_empty() {
    let mut ctx = TestContext::new();
    let owner_id = Uuid::new_v4();

    ctx.drone_repo
        .expect_get_drones_by_owner()
        .with(predicate::eq(owner_id))
        .returning(|_| Ok(vec![]));

    let drones = ctx.drone_repo.get_drones_by_owner(owner_id).await.unwrap();

    assert!(drones.is_empty());
}
