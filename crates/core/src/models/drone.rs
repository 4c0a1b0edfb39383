use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{RentalError, RentalResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDroneRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub drone_type: String,
    pub capacity: i32,
    #[serde(rename = "pricePerAcre")]
    pub price_per_acre: f64,
    pub durability: i32,
    #[serde(rename = "purchasedDate")]
    pub purchased_date: NaiveDate,
    #[serde(rename = "isNGO")]
    pub is_ngo: bool,
    #[serde(rename = "ngoName", default)]
    pub ngo_name: Option<String>,
}

impl CreateDroneRequest {
    /// Boundary validation of drone specs; rejected requests never reach
    /// the registry.
    pub fn validate(&self) -> RentalResult<()> {
        if self.name.trim().is_empty() {
            return Err(RentalError::Validation("Drone name is required".to_string()));
        }
        if self.drone_type.trim().is_empty() {
            return Err(RentalError::Validation("Drone type is required".to_string()));
        }
        if self.capacity <= 0 {
            return Err(RentalError::Validation(
                "Drone capacity must be positive".to_string(),
            ));
        }
        if self.price_per_acre <= 0.0 {
            return Err(RentalError::Validation(
                "Price per acre must be positive".to_string(),
            ));
        }
        if self.durability <= 0 {
            return Err(RentalError::Validation(
                "Drone durability must be positive".to_string(),
            ));
        }
        if self.is_ngo && self.ngo_name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            return Err(RentalError::Validation(
                "NGO name is required for NGO-operated drones".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneResponse {
    pub id: Uuid,
    #[serde(rename = "ownerId")]
    pub owner_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub drone_type: String,
    pub capacity: i32,
    #[serde(rename = "pricePerAcre")]
    pub price_per_acre: f64,
    pub durability: i32,
    #[serde(rename = "purchasedDate")]
    pub purchased_date: NaiveDate,
    #[serde(rename = "isNGO")]
    pub is_ngo: bool,
    #[serde(rename = "ngoName")]
    pub ngo_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Field-limited projection for the public discovery listing; owner and
/// purchase detail stay private.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneSummary {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub drone_type: String,
    pub capacity: i32,
    #[serde(rename = "pricePerAcre")]
    pub price_per_acre: f64,
    pub durability: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneListResponse {
    pub drones: Vec<DroneSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerDronesResponse {
    pub drones: Vec<DroneResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneDetailResponse {
    #[serde(rename = "droneDetail")]
    pub drone_detail: DroneResponse,
}
