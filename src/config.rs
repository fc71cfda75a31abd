use std::path::{Path, PathBuf};

use anyhow::Result;
use config::Config;
use serde::{Deserialize, Serialize};

use crate::tokenizer::TokenizerOptions;

const CONFIG_FILE: &str = ".sentok/config.toml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentokConfig {
    pub tokenizer: TokenizerOptions,
}

pub fn find_config_path(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start.to_path_buf());
    while let Some(dir) = current {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.exists() {
            return Some(candidate);
        }
        current = dir.parent().map(|p| p.to_path_buf());
    }
    None
}

/// Loads the nearest config file at or above `start`, or the defaults if
/// there is none.
pub fn load_config(start: &Path) -> Result<SentokConfig> {
    let Some(cfg_path) = find_config_path(start) else {
        return Ok(SentokConfig::default());
    };
    let cfg = Config::builder()
        .add_source(config::File::from(cfg_path.as_path()))
        .build()?;
    let cfg = SentokConfig::deserialize(cfg)?;
    tracing::debug!(?cfg, path = %cfg_path.display(), "Loaded config");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_config(root: &Path, contents: &str) {
        let dir = root.join(".sentok");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), contents).unwrap();
    }

    #[test]
    fn finds_config_in_ancestor() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "");
        let nested = tmp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_path(&nested).unwrap();
        assert_eq!(found, tmp.path().join(CONFIG_FILE));
    }

    #[test]
    fn partial_tokenizer_table_keeps_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(
            tmp.path(),
            r#"
[tokenizer]
lower = false
oov_token = "<unk>"
num_words = 100
"#,
        );

        let cfg = load_config(tmp.path()).unwrap();
        let expected = TokenizerOptions {
            lower: false,
            oov_token: Some("<unk>".to_string()),
            num_words: Some(100),
            ..Default::default()
        };
        assert_eq!(cfg.tokenizer, expected);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "[tokenizer]\nlower = \"sometimes\"\n");
        assert!(load_config(tmp.path()).is_err());
    }
}
