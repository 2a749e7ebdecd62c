use std::cell::{Cell, RefCell};

use anyhow::{Result, bail};

use crate::store::ProgressStore;
use crate::store::schema::{ProfileData, Schedule};

/// Process-local store. Saves can be switched to fail to exercise the
/// best-effort persistence path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    schedule: RefCell<Schedule>,
    profile: RefCell<ProfileData>,
    fail_saves: Cell<bool>,
    save_count: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(schedule: Schedule) -> Self {
        let store = Self::default();
        *store.schedule.borrow_mut() = schedule;
        store
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Successful saves so far.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_saves.get() {
            bail!("memory store is read-only");
        }
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}

impl ProgressStore for MemoryStore {
    fn load_schedule(&self) -> Schedule {
        self.schedule.borrow().clone()
    }

    fn save_schedule(&self, schedule: &Schedule) -> Result<()> {
        self.check_writable()?;
        *self.schedule.borrow_mut() = schedule.clone();
        Ok(())
    }

    fn load_profile(&self) -> ProfileData {
        self.profile.borrow().clone()
    }

    fn save_profile(&self, profile: &ProfileData) -> Result<()> {
        self.check_writable()?;
        *self.profile.borrow_mut() = profile.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::engine::srs;

    #[test]
    fn failed_save_leaves_previous_data() {
        let store = MemoryStore::new();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut schedule = Schedule::new();
        schedule.insert("v001".into(), srs::create_initial("v001", today));
        store.save_schedule(&schedule).unwrap();

        store.set_fail_saves(true);
        assert!(store.save_schedule(&Schedule::new()).is_err());
        assert_eq!(store.load_schedule().len(), 1);
        assert_eq!(store.save_count(), 1);
    }
}
