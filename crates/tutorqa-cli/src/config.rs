use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    pub dataset: Option<PathBuf>,
    pub start_channel: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            start_channel: None,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("tutorqa").join("config.toml"))
}

pub fn load_config() -> Result<HostConfig, Box<dyn std::error::Error>> {
    match default_config_path() {
        Some(path) => load_config_from(path.as_path()),
        None => Ok(HostConfig::default()),
    }
}

// A missing file means defaults; a malformed file is an error.
pub fn load_config_from(path: &Path) -> Result<HostConfig, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok(HostConfig::default());
    }
    let text = std::fs::read_to_string(path)?;
    let config = toml::from_str::<HostConfig>(&text)
        .map_err(|err| format!("parse {}: {err}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::load_config_from;
    use super::HostConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tmpdir");
        let config = load_config_from(&dir.path().join("config.toml")).expect("load");
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_absent_keys() {
        let dir = tempdir().expect("tmpdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "start_channel = \"c2\"\n").expect("write");

        let config = load_config_from(&path).expect("load");
        assert_eq!(config.start_channel.as_deref(), Some("c2"));
        assert_eq!(config.dataset, None);
    }

    #[test]
    fn full_file_parses_both_keys() {
        let dir = tempdir().expect("tmpdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "dataset = \"/srv/tutorqa/dataset.json\"\nstart_channel = \"c1\"\n",
        )
        .expect("write");

        let config = load_config_from(&path).expect("load");
        assert_eq!(
            config.dataset.as_deref(),
            Some(std::path::Path::new("/srv/tutorqa/dataset.json"))
        );
        assert_eq!(config.start_channel.as_deref(), Some("c1"));
    }

    #[test]
    fn malformed_file_reports_the_path() {
        let dir = tempdir().expect("tmpdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "dataset = [broken\n").expect("write");

        let err = load_config_from(&path).expect_err("must fail");
        assert!(err.to_string().contains("config.toml"));
    }
}
