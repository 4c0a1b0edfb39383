use crate::models::DbLocationDetails;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// One row per user; repeated submissions overwrite the stored details.
#[allow(clippy::too_many_arguments)]
pub async fn upsert_details(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    address: &str,
    taluka: &str,
    pin_code: &str,
    state: &str,
    whatsapp_number: &str,
    pan_number: &str,
    aadhar_number: &str,
    contact_number: &str,
) -> Result<DbLocationDetails> {
    let now = Utc::now();

    tracing::debug!("Saving location details: user_id={}", user_id);

    let details = sqlx::query_as::<_, DbLocationDetails>(
        r#"
        INSERT INTO location_details (user_id, address, taluka, pin_code, state,
                                      whatsapp_number, pan_number, aadhar_number,
                                      contact_number, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (user_id) DO UPDATE
        SET address = EXCLUDED.address,
            taluka = EXCLUDED.taluka,
            pin_code = EXCLUDED.pin_code,
            state = EXCLUDED.state,
            whatsapp_number = EXCLUDED.whatsapp_number,
            pan_number = EXCLUDED.pan_number,
            aadhar_number = EXCLUDED.aadhar_number,
            contact_number = EXCLUDED.contact_number
        RETURNING user_id, address, taluka, pin_code, state, whatsapp_number,
                  pan_number, aadhar_number, contact_number, created_at
        "#,
    )
    .bind(user_id)
    .bind(address)
    .bind(taluka)
    .bind(pin_code)
    .bind(state)
    .bind(whatsapp_number)
    .bind(pan_number)
    .bind(aadhar_number)
    .bind(contact_number)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(details)
}

pub async fn get_details_by_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Option<DbLocationDetails>> {
    let details = sqlx::query_as::<_, DbLocationDetails>(
        r#"
        SELECT user_id, address, taluka, pin_code, state, whatsapp_number,
               pan_number, aadhar_number, contact_number, created_at
        FROM location_details
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(details)
}
