// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::{AppContext, CONFIG_FILE_NAME};
use crate::model::{Reminder, ReminderRange, TemplateSet};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Level of the first-run notice. Must pass the binary's default filter.
pub const BOOTSTRAP_NOTICE_LEVEL: log::Level = log::Level::Warn;

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub range: ReminderRange,
    pub template: TemplateSet,
    #[serde(rename = "birthday")]
    pub birthdays: Vec<Reminder>,
    #[serde(rename = "reminder")]
    pub reminders: Vec<Reminder>,
}

/// One file on disk. Tables that are absent leave the accumulated value alone.
/// The capitalized aliases are the keys written by older britto releases.
#[derive(Deserialize, Debug, Default)]
struct ConfigFile {
    #[serde(alias = "ReminderRange")]
    range: Option<ReminderRange>,
    template: Option<TemplateSet>,
    #[serde(default, alias = "Birthday")]
    birthday: Vec<Reminder>,
    #[serde(default, alias = "Reminder")]
    reminder: Vec<Reminder>,
}

impl Config {
    /// The config written on first run, with a few entries to edit.
    pub fn example() -> Self {
        Self {
            range: ReminderRange::default(),
            template: TemplateSet::default(),
            birthdays: vec![
                Reminder::new("Example Person", "01/01/2000"),
                Reminder::new("Example Person 2", "07/01/2000")
                    .with_message("Remember to buy a present"),
            ],
            reminders: vec![
                Reminder::new("Example Event", "31/12")
                    .with_message("Don't forget about the Example Event!"),
                Reminder::new("Example Event 2", "31/12/2024").one_time(),
            ],
        }
    }

    /// Load the configuration from the context's config directory.
    /// Writes the example config first if the main file does not exist yet.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        if let Some(path) = Self::bootstrap(ctx)? {
            log::log!(
                BOOTSTRAP_NOTICE_LEVEL,
                "Config file did not exist. Default config saved to {}. Please edit it with your reminders.",
                path.display()
            );
        }
        Self::load_dir(&ctx.get_config_dir()?)
    }

    /// Writes the example config if the main file is missing.
    /// Returns the path written, or `None` when a config was already there.
    pub fn bootstrap(ctx: &dyn AppContext) -> Result<Option<PathBuf>> {
        let path = ctx.get_config_file_path()?;
        if path.exists() {
            return Ok(None);
        }
        Self::example().save(ctx)?;
        Ok(Some(path))
    }

    /// Load from an explicit path, which may be a single file or a directory.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.is_dir() {
            return Self::load_dir(path);
        }
        let mut config = Self::default();
        config.merge(Self::read_file(path)?);
        Ok(config)
    }

    /// Reads every `*.toml` file in `dir`: the main file first, then the rest
    /// in lexical order.
    fn load_dir(dir: &Path) -> Result<Self> {
        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .with_context(|| format!("Failed to read config directory '{}'", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        files.sort_by_key(|p| (p.file_name().is_none_or(|n| n != CONFIG_FILE_NAME), p.clone()));

        if files.is_empty() {
            anyhow::bail!("No config files found in '{}'", dir.display());
        }

        let mut config = Self::default();
        for file in &files {
            log::debug!("Loading config file {}", file.display());
            config.merge(Self::read_file(file)?);
        }
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    fn merge(&mut self, file: ConfigFile) {
        if let Some(range) = file.range {
            self.range = range;
        }
        if let Some(template) = file.template {
            self.template = template;
        }
        self.birthdays.extend(file.birthday);
        self.reminders.extend(file.reminder);
    }

    /// Save configuration to the context's main config file.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self).context("Failed to encode config")?;
        atomic_write(&path, toml_str)
            .with_context(|| format!("Failed to write config file '{}'", path.display()))
    }
}

fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
