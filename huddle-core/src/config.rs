//! User configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use ::config::{Config, Environment, File};
use log::debug;
use serde::Deserialize;

use crate::attendee::Attendee;
use crate::error::{HuddleError, HuddleResult};
use crate::month::WeekStart;

static DEFAULT_USER_ID: &str = "me";
static DEFAULT_USER_NAME: &str = "You";

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

fn default_user_name() -> String {
    DEFAULT_USER_NAME.to_string()
}

/// Configuration at ~/.config/huddle/config.toml, overridable with
/// `HUDDLE_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct HuddleConfig {
    #[serde(default)]
    pub week_start: WeekStart,

    /// IANA zone name. Falls back to the system zone.
    pub timezone: Option<String>,

    #[serde(default = "default_user_id")]
    pub user_id: String,

    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// JSON file with events to start from
    pub seed_file: Option<PathBuf>,
}

impl HuddleConfig {
    pub fn config_path() -> HuddleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HuddleError::Config("Could not determine config directory".into()))?
            .join("huddle");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented-out template first
    /// if no file exists yet.
    pub fn load() -> HuddleResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> HuddleResult<Self> {
        debug!("Loading config from {}", path.display());

        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("HUDDLE"))
            .build()
            .map_err(|e| HuddleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HuddleError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> HuddleResult<()> {
        let contents = format!(
            "\
# huddle configuration

# First day of the week in the month view (\"sunday\" or \"monday\"):
# week_start = \"sunday\"

# Timezone used to decide which day an event falls on (defaults to the system zone):
# timezone = \"Europe/Berlin\"

# Who you are when creating and joining events:
# user_id = \"{}\"
# user_name = \"{}\"

# Events to load on startup (JSON):
# seed_file = \"~/huddle-events.json\"
",
            DEFAULT_USER_ID, DEFAULT_USER_NAME
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HuddleError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| HuddleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn timezone(&self) -> HuddleResult<Tz> {
        match &self.timezone {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|_| HuddleError::InvalidTimezone(name.clone())),
            None => Ok(system_timezone()),
        }
    }

    pub fn user(&self) -> Attendee {
        Attendee::new(self.user_id.clone(), self.user_name.clone())
    }

    /// Seed file path with `~` expanded.
    pub fn seed_path(&self) -> Option<PathBuf> {
        self.seed_file.as_ref().map(|path| {
            PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
        })
    }
}

fn system_timezone() -> Tz {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse().ok())
        .unwrap_or(Tz::UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HuddleConfig::load_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.user_id, "me");
        assert_eq!(config.user_name, "You");
        assert!(config.seed_path().is_none());
    }

    #[test]
    fn reads_values_from_file() {
        let (_dir, path) = write_config(
            r#"
week_start = "monday"
timezone = "Europe/Berlin"
user_id = "ada"
user_name = "Ada Lovelace"
seed_file = "/tmp/events.json"
"#,
        );

        let config = HuddleConfig::load_from(&path).unwrap();
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.timezone().unwrap(), chrono_tz::Europe::Berlin);
        assert_eq!(config.user(), Attendee::new("ada", "Ada Lovelace"));
        assert_eq!(config.seed_path(), Some(PathBuf::from("/tmp/events.json")));
    }

    #[test]
    fn default_template_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        HuddleConfig::create_default_config(&path).unwrap();
        let config = HuddleConfig::load_from(&path).unwrap();
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert!(config.timezone.is_none());
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let (_dir, path) = write_config("timezone = \"Mars/Olympus_Mons\"\n");
        let config = HuddleConfig::load_from(&path).unwrap();
        assert!(matches!(
            config.timezone(),
            Err(HuddleError::InvalidTimezone(name)) if name == "Mars/Olympus_Mons"
        ));
    }

    #[test]
    fn bad_week_start_is_a_config_error() {
        let (_dir, path) = write_config("week_start = \"friday\"\n");
        assert!(matches!(
            HuddleConfig::load_from(&path),
            Err(HuddleError::Config(_))
        ));
    }
}
