use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDrone {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub drone_type: String,
    pub capacity: i32,
    pub price_per_acre: f64,
    pub durability: i32,
    pub purchased_date: NaiveDate,
    pub is_ngo: bool,
    pub ngo_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSchedule {
    pub id: Uuid,
    pub drone_id: Uuid,
    pub scheduled_date: NaiveDate,
    pub time_slot: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbLocationDetails {
    pub user_id: Uuid,
    pub address: String,
    pub taluka: String,
    pub pin_code: String,
    pub state: String,
    pub whatsapp_number: String,
    pub pan_number: String,
    pub aadhar_number: String,
    pub contact_number: String,
    pub created_at: DateTime<Utc>,
}
