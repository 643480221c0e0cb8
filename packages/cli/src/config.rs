use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "webcraft.config.json";

/// WebCraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JSON file backing the local store
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Working copy of the page between commands
    #[serde(default = "default_draft_path")]
    pub draft_path: String,

    /// User the store records belong to
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Name of a new site
    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default = "default_theme")]
    pub theme: String,

    /// Where `render` writes HTML
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_store_path() -> String {
    ".webcraft/store.json".to_string()
}

fn default_draft_path() -> String {
    ".webcraft/draft.json".to_string()
}

fn default_user_id() -> String {
    "local".to_string()
}

fn default_site_name() -> String {
    webcraft_sync::DEFAULT_SITE_NAME.to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn store_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.store_path)
    }

    pub fn draft_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.draft_path)
    }

    pub fn out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            draft_path: default_draft_path(),
            user_id: default_user_id(),
            site_name: default_site_name(),
            theme: default_theme(),
            out_dir: default_out_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "storePath": "data/site.json",
            "userId": "alice",
            "siteName": "Portfolio",
            "theme": "dark",
            "outDir": "public"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.store_path, "data/site.json");
        assert_eq!(config.user_id, "alice");
        assert_eq!(config.site_name, "Portfolio");
        assert_eq!(config.theme, "dark");
        assert_eq!(config.out_dir, "public");
        assert_eq!(config.draft_path, ".webcraft/draft.json");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.user_id, "local");
        assert_eq!(config.site_name, "My Website");
        assert_eq!(config.out_dir, "dist");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }
}
