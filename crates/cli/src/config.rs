//! Environment-driven CLI configuration.
use std::env;
use std::path::PathBuf;

/// Data file locations.
///
/// Command-line flags take precedence over these values.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `characters.json`, `equipment.json` and `config.toml`.
    pub data_dir: PathBuf,
    pub characters: Option<PathBuf>,
    pub equipment: Option<PathBuf>,
    pub tunables: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TEAM_DATA_DIR` - Data directory (default: platform data directory)
    /// - `TEAM_CHARACTERS` - Characters JSON file
    /// - `TEAM_EQUIPMENT` - Equipment JSON file
    /// - `TEAM_CONFIG` - Tunables TOML file
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("TEAM_DATA_DIR").unwrap_or_else(default_data_dir),
            characters: read_env("TEAM_CHARACTERS"),
            equipment: read_env("TEAM_EQUIPMENT"),
            tunables: read_env("TEAM_CONFIG"),
        }
    }
}

/// Platform data directory for the builder.
///
/// - macOS: `~/Library/Application Support/team-builder`
/// - Linux: `~/.local/share/team-builder` (or `$XDG_DATA_HOME/team-builder`)
/// - Windows: `%APPDATA%\team-builder`
/// - Fallback: `./data`
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "team-builder")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    value.parse().ok()
}
