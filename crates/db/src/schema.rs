use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            role VARCHAR(32) NOT NULL,
            city VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create drones table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS drones (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            owner_id UUID NOT NULL REFERENCES users(id),
            name VARCHAR(255) NOT NULL,
            drone_type VARCHAR(255) NOT NULL,
            capacity INTEGER NOT NULL,
            price_per_acre DOUBLE PRECISION NOT NULL,
            durability INTEGER NOT NULL,
            purchased_date DATE NOT NULL,
            is_ngo BOOLEAN NOT NULL DEFAULT FALSE,
            ngo_name VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_capacity CHECK (capacity > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedules table. The unique constraint on the composite
    // booking key is what makes conflict detection atomic: booking
    // insertion rides this index in a single statement.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedules (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            drone_id UUID NOT NULL REFERENCES drones(id) ON DELETE CASCADE,
            scheduled_date DATE NOT NULL,
            time_slot VARCHAR(32) NOT NULL,
            created_by UUID NOT NULL REFERENCES users(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_booking UNIQUE (drone_id, scheduled_date, time_slot)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create location_details table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS location_details (
            user_id UUID PRIMARY KEY REFERENCES users(id),
            address VARCHAR(512) NOT NULL,
            taluka VARCHAR(255) NOT NULL,
            pin_code VARCHAR(16) NOT NULL,
            state VARCHAR(255) NOT NULL,
            whatsapp_number VARCHAR(32) NOT NULL,
            pan_number VARCHAR(32) NOT NULL,
            aadhar_number VARCHAR(32) NOT NULL,
            contact_number VARCHAR(32) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_drones_owner_id ON drones(owner_id);",
        "CREATE INDEX IF NOT EXISTS idx_schedules_drone_id ON schedules(drone_id);",
        "CREATE INDEX IF NOT EXISTS idx_schedules_created_by ON schedules(created_by);",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
