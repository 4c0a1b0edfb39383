use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbDrone, DbLocationDetails, DbSchedule, DbUser};

// Mock repositories for testing
mock! {
    pub ScheduleRepo {
        pub async fn create_schedule(
            &self,
            drone_id: Uuid,
            scheduled_date: NaiveDate,
            time_slot: String,
            created_by: Uuid,
        ) -> eyre::Result<Option<DbSchedule>>;

        pub async fn delete_schedule(
            &self,
            drone_id: Uuid,
            scheduled_date: NaiveDate,
            time_slot: String,
        ) -> eyre::Result<bool>;

        pub async fn get_schedules_by_drone(
            &self,
            drone_id: Uuid,
        ) -> eyre::Result<Vec<DbSchedule>>;
    }
}

mock! {
    pub DroneRepo {
        pub async fn create_drone(
            &self,
            owner_id: Uuid,
            name: String,
            drone_type: String,
            capacity: i32,
            price_per_acre: f64,
            durability: i32,
            purchased_date: NaiveDate,
            is_ngo: bool,
            ngo_name: Option<String>,
        ) -> eyre::Result<DbDrone>;

        pub async fn get_drone_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbDrone>>;

        pub async fn get_drones_by_owner(
            &self,
            owner_id: Uuid,
        ) -> eyre::Result<Vec<DbDrone>>;

        pub async fn get_all_drones(&self) -> eyre::Result<Vec<DbDrone>>;
    }
}

mock! {
    pub UserRepo {
        pub async fn create_user(
            &self,
            name: String,
            email: String,
            password_hash: String,
            role: String,
            city: String,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn get_user_by_email(
            &self,
            email: String,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn get_user_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbUser>>;
    }
}

mock! {
    pub LocationRepo {
        pub async fn upsert_details(
            &self,
            user_id: Uuid,
            details: DbLocationDetails,
        ) -> eyre::Result<DbLocationDetails>;

        pub async fn get_details_by_user(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Option<DbLocationDetails>>;
    }
}
