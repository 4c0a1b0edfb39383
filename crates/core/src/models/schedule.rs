use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::time_slot::TimeSlot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub date: NaiveDate,
    #[serde(rename = "timeSlot")]
    pub time_slot: TimeSlot,
}

/// Bookings are deleted by key, not by id; the payload shape matches the
/// booking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteScheduleRequest {
    pub date: NaiveDate,
    #[serde(rename = "timeSlot")]
    pub time_slot: TimeSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntryResponse {
    pub date: NaiveDate,
    #[serde(rename = "timeSlot")]
    pub time_slot: TimeSlot,
}

/// One element of the owner report: a drone's display name paired with its
/// full booking list. Field names match the wire contract of the mobile
/// client (`DroneName` / `DroneSchedule`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerScheduleResponse {
    #[serde(rename = "DroneName")]
    pub drone_name: String,
    #[serde(rename = "DroneSchedule")]
    pub drone_schedule: Vec<ScheduleEntryResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerSchedulesResponse {
    #[serde(rename = "Schedules")]
    pub schedules: Vec<OwnerScheduleResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
