/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::SharepageConfig;

pub const CONFIG_FILE: &str = "sharepage.toml";

/// Walk upward from `start` looking for `sharepage.toml`; `None` when no ancestor has one.
pub fn find_config(start: &Path) -> Result<Option<PathBuf>> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(Some(candidate));
    }
    if !dir.pop() {
      return Ok(None);
    }
  }
}

pub fn load_config(path: &Path) -> Result<SharepageConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  parse_config(&content).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<SharepageConfig> {
  let config: SharepageConfig = toml::from_str(content)?;
  config.i18n.validate()?;
  Ok(config)
}

/// Explicit path, else discovered file, else built-in defaults.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<SharepageConfig> {
  let path = match explicit {
    Some(p) => Some(p.to_path_buf()),
    None => find_config(cwd)?,
  };
  match path {
    Some(p) => {
      tracing::debug!(path = %p.display(), "loading config");
      load_config(&p)
    }
    None => Ok(SharepageConfig::default()),
  }
}
