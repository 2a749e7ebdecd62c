use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

use crate::config::Config;
use crate::store::ProgressStore;
use crate::store::schema::{
    EXPORT_VERSION, ExportData, ProfileData, Schedule, ScheduleData, Versioned,
};

const SCHEDULE_FILE: &str = "vocab_progress.json";
const PROFILE_FILE: &str = "profile.json";
const DATA_FILES: [&str; 2] = [SCHEDULE_FILE, PROFILE_FILE];

pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ivrikey");
        Self::with_base_dir(base_dir)
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Store rooted at the configured data directory, or the platform default.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.data_dir {
            Some(dir) => Self::with_base_dir(PathBuf::from(dir)),
            None => Self::new(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Missing, unreadable, unparseable and stale-schema files all load as
    /// the default value.
    fn load<T: DeserializeOwned + Default + Versioned>(&self, name: &str) -> T {
        let path = self.file_path(name);
        if !path.exists() {
            return T::default();
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "could not read progress file");
                return T::default();
            }
        };
        match serde_json::from_str::<T>(&content) {
            Ok(data) if data.needs_reset() => {
                tracing::warn!(
                    path = %path.display(),
                    version = data.schema_version(),
                    "ignoring progress file with unsupported schema version"
                );
                T::default()
            }
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring corrupt progress file");
                T::default()
            }
        }
    }

    fn save<T: Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let path = self.file_path(name);
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(data)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        tracing::debug!(path = %path.display(), "saved progress file");
        Ok(())
    }

    pub fn export_all(&self, config: &Config) -> ExportData {
        ExportData {
            ivrikey_export_version: EXPORT_VERSION,
            exported_at: Utc::now(),
            config: config.clone(),
            profile: self.load(PROFILE_FILE),
            schedule: ScheduleData {
                items: self.load_schedule(),
                ..ScheduleData::default()
            },
        }
    }

    /// Replace all progress with `data`.
    ///
    /// Every file is staged as `.tmp` first; nothing is touched unless all
    /// stage. Originals are then moved to `.bak` and the staged files renamed
    /// into place, restoring the backups if any rename fails.
    pub fn import_all(&self, data: &ExportData) -> Result<()> {
        if data.ivrikey_export_version != EXPORT_VERSION {
            bail!(
                "Unsupported export version: {} (expected {})",
                data.ivrikey_export_version,
                EXPORT_VERSION
            );
        }

        let files: [(&str, String); 2] = [
            (SCHEDULE_FILE, serde_json::to_string_pretty(&data.schedule)?),
            (PROFILE_FILE, serde_json::to_string_pretty(&data.profile)?),
        ];

        let mut staged: Vec<PathBuf> = Vec::new();
        for (name, json) in &files {
            let tmp_path = self.file_path(name).with_extension("json.tmp");
            let written = (|| -> Result<()> {
                let mut file = fs::File::create(&tmp_path)?;
                file.write_all(json.as_bytes())?;
                file.sync_all()?;
                Ok(())
            })();
            match written {
                Ok(()) => staged.push(tmp_path),
                Err(e) => {
                    remove_all(&staged);
                    bail!("Import failed during staging: {e}");
                }
            }
        }

        // (final path, backup path, whether an original existed)
        let mut committed: Vec<(PathBuf, PathBuf, bool)> = Vec::new();
        for (i, (name, _)) in files.iter().enumerate() {
            let final_path = self.file_path(name);
            let bak_path = final_path.with_extension("json.bak");
            let had_original = final_path.exists();

            if had_original && let Err(e) = fs::rename(&final_path, &bak_path) {
                rollback(&committed);
                remove_all(&staged);
                bail!("Import failed during commit (backup): {e}");
            }

            if let Err(e) = fs::rename(&staged[i], &final_path) {
                if had_original {
                    let _ = fs::rename(&bak_path, &final_path);
                }
                rollback(&committed);
                remove_all(&staged[i + 1..]);
                bail!("Import failed during commit (rename): {e}");
            }

            committed.push((final_path, bak_path, had_original));
        }

        for (_, bak_path, had_original) in &committed {
            if *had_original {
                let _ = fs::remove_file(bak_path);
            }
        }
        tracing::info!(dir = %self.base_dir.display(), "imported progress");
        Ok(())
    }

    /// Clean up `.bak` files left by an interrupted import. Returns whether
    /// any were found.
    pub fn check_interrupted_import(&self) -> bool {
        let mut found = false;
        for name in DATA_FILES {
            let bak_path = self.file_path(name).with_extension("json.bak");
            if bak_path.exists() {
                found = true;
                let _ = fs::remove_file(&bak_path);
            }
        }
        found
    }
}

fn remove_all(paths: &[PathBuf]) {
    for path in paths {
        let _ = fs::remove_file(path);
    }
}

fn rollback(committed: &[(PathBuf, PathBuf, bool)]) {
    for (final_path, bak_path, had_original) in committed {
        if *had_original {
            let _ = fs::rename(bak_path, final_path);
        } else {
            let _ = fs::remove_file(final_path);
        }
    }
}

impl ProgressStore for JsonStore {
    /// Entries that break a schedule invariant are dropped individually.
    fn load_schedule(&self) -> Schedule {
        let mut items = self.load::<ScheduleData>(SCHEDULE_FILE).items;
        items.retain(|key, state| {
            let keep = *key == state.item_id && state.is_consistent();
            if !keep {
                tracing::warn!(
                    item = %key,
                    ease_factor = state.ease_factor,
                    review_count = state.review_count,
                    correct_count = state.correct_count,
                    "dropping inconsistent schedule entry"
                );
            }
            keep
        });
        items
    }

    fn save_schedule(&self, schedule: &Schedule) -> Result<()> {
        self.save(
            SCHEDULE_FILE,
            &ScheduleData {
                items: schedule.clone(),
                ..ScheduleData::default()
            },
        )
    }

    fn load_profile(&self) -> ProfileData {
        self.load(PROFILE_FILE)
    }

    fn save_profile(&self, profile: &ProfileData) -> Result<()> {
        self.save(PROFILE_FILE, profile)
    }
}
