pub mod json_store;
pub mod memory;
pub mod schema;

use anyhow::Result;

use crate::store::schema::{ProfileData, Schedule};

/// Durable home of review schedules and speed records.
///
/// Loads never fail: missing or unreadable data comes back empty. Saves
/// report failure, but callers treat them as best effort and keep their
/// in-memory state authoritative.
pub trait ProgressStore {
    fn load_schedule(&self) -> Schedule;
    fn save_schedule(&self, schedule: &Schedule) -> Result<()>;
    fn load_profile(&self) -> ProfileData;
    fn save_profile(&self, profile: &ProfileData) -> Result<()>;
}
