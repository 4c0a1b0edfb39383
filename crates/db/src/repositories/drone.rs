use crate::models::DbDrone;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[allow(clippy::too_many_arguments)]
pub async fn create_drone(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    name: &str,
    drone_type: &str,
    capacity: i32,
    price_per_acre: f64,
    durability: i32,
    purchased_date: NaiveDate,
    is_ngo: bool,
    ngo_name: Option<&str>,
) -> Result<DbDrone> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating drone: id={}, owner_id={}, name={}", id, owner_id, name);

    let drone = sqlx::query_as::<_, DbDrone>(
        r#"
        INSERT INTO drones (id, owner_id, name, drone_type, capacity, price_per_acre,
                            durability, purchased_date, is_ngo, ngo_name, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id, owner_id, name, drone_type, capacity, price_per_acre,
                  durability, purchased_date, is_ngo, ngo_name, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(name)
    .bind(drone_type)
    .bind(capacity)
    .bind(price_per_acre)
    .bind(durability)
    .bind(purchased_date)
    .bind(is_ngo)
    .bind(ngo_name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(drone)
}

pub async fn get_drone_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbDrone>> {
    let drone = sqlx::query_as::<_, DbDrone>(
        r#"
        SELECT id, owner_id, name, drone_type, capacity, price_per_acre,
               durability, purchased_date, is_ngo, ngo_name, created_at
        FROM drones
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(drone)
}

pub async fn get_drones_by_owner(pool: &Pool<Postgres>, owner_id: Uuid) -> Result<Vec<DbDrone>> {
    let drones = sqlx::query_as::<_, DbDrone>(
        r#"
        SELECT id, owner_id, name, drone_type, capacity, price_per_acre,
               durability, purchased_date, is_ngo, ngo_name, created_at
        FROM drones
        WHERE owner_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(drones)
}

pub async fn get_all_drones(pool: &Pool<Postgres>) -> Result<Vec<DbDrone>> {
    let drones = sqlx::query_as::<_, DbDrone>(
        r#"
        SELECT id, owner_id, name, drone_type, capacity, price_per_acre,
               durability, purchased_date, is_ngo, ngo_name, created_at
        FROM drones
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(drones)
}
