use crate::models::DbSchedule;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts a booking for the (drone, date, slot) composite key.
///
/// Returns `Ok(None)` when the key is already booked. The insert and the
/// conflict check are one statement riding the `unique_booking` index, so
/// two concurrent bookings of the same key cannot both succeed.
pub async fn create_schedule(
    pool: &Pool<Postgres>,
    drone_id: Uuid,
    scheduled_date: NaiveDate,
    time_slot: &str,
    created_by: Uuid,
) -> Result<Option<DbSchedule>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating schedule: drone_id={}, date={}, time_slot={}, created_by={}",
        drone_id,
        scheduled_date,
        time_slot,
        created_by
    );

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        INSERT INTO schedules (id, drone_id, scheduled_date, time_slot, created_by, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (drone_id, scheduled_date, time_slot) DO NOTHING
        RETURNING id, drone_id, scheduled_date, time_slot, created_by, created_at
        "#,
    )
    .bind(id)
    .bind(drone_id)
    .bind(scheduled_date)
    .bind(time_slot)
    .bind(created_by)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    if schedule.is_some() {
        tracing::debug!("Schedule created: id={}", id);
    } else {
        tracing::debug!(
            "Booking conflict: drone_id={}, date={}, time_slot={}",
            drone_id,
            scheduled_date,
            time_slot
        );
    }

    Ok(schedule)
}

/// Removes a booking by composite key. Returns `false` when no row
/// matched, so a repeated delete reports not-found rather than silently
/// succeeding.
pub async fn delete_schedule(
    pool: &Pool<Postgres>,
    drone_id: Uuid,
    scheduled_date: NaiveDate,
    time_slot: &str,
) -> Result<bool> {
    tracing::debug!(
        "Deleting schedule: drone_id={}, date={}, time_slot={}",
        drone_id,
        scheduled_date,
        time_slot
    );

    let result = sqlx::query(
        r#"
        DELETE FROM schedules
        WHERE drone_id = $1 AND scheduled_date = $2 AND time_slot = $3
        "#,
    )
    .bind(drone_id)
    .bind(scheduled_date)
    .bind(time_slot)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// All bookings for a drone, in creation order.
pub async fn get_schedules_by_drone(
    pool: &Pool<Postgres>,
    drone_id: Uuid,
) -> Result<Vec<DbSchedule>> {
    let schedules = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, drone_id, scheduled_date, time_slot, created_by, created_at
        FROM schedules
        WHERE drone_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(drone_id)
    .fetch_all(pool)
    .await?;

    Ok(schedules)
}
