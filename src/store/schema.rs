use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::engine::speed_records::SpeedRecords;
use crate::engine::srs::ScheduleState;

pub const SCHEMA_VERSION: u32 = 1;

/// Review schedules keyed by vocabulary id.
pub type Schedule = HashMap<String, ScheduleState>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleData {
    pub schema_version: u32,
    pub items: Schedule,
}

impl Default for ScheduleData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            items: Schedule::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub schema_version: u32,
    #[serde(flatten)]
    pub speed: SpeedRecords,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            speed: SpeedRecords::default(),
        }
    }
}

/// Data written by an older or newer build is dropped rather than guessed at.
pub trait Versioned {
    fn schema_version(&self) -> u32;

    fn needs_reset(&self) -> bool {
        self.schema_version() != SCHEMA_VERSION
    }
}

impl Versioned for ScheduleData {
    fn schema_version(&self) -> u32 {
        self.schema_version
    }
}

impl Versioned for ProfileData {
    fn schema_version(&self) -> u32 {
        self.schema_version
    }
}

pub const EXPORT_VERSION: u32 = 1;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportData {
    pub ivrikey_export_version: u32,
    pub exported_at: DateTime<Utc>,
    pub config: Config,
    pub profile: ProfileData,
    pub schedule: ScheduleData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_flattens_speed_records() {
        let mut profile = ProfileData::default();
        profile.speed.streak = 3;
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["streak"], 3);
        assert_eq!(json["schema_version"], SCHEMA_VERSION);
    }

    #[test]
    fn stale_version_needs_reset() {
        let data = ScheduleData {
            schema_version: 0,
            items: Schedule::new(),
        };
        assert!(data.needs_reset());
        assert!(!ScheduleData::default().needs_reset());
    }
}
