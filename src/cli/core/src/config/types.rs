/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use serde::Deserialize;
use sharepage_server::I18nConfig;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SharepageConfig {
  #[serde(default)]
  pub i18n: I18nSection,
  #[serde(default)]
  pub output: OutputSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  #[serde(default = "default_locales")]
  pub locales: Vec<String>,
  #[serde(default = "default_locale")]
  pub default: String,
}

impl Default for I18nSection {
  fn default() -> Self {
    Self { locales: default_locales(), default: default_locale() }
  }
}

impl I18nSection {
  pub fn validate(&self) -> Result<()> {
    if self.locales.is_empty() {
      bail!("i18n.locales must not be empty");
    }
    if !self.locales.contains(&self.default) {
      bail!("i18n.default \"{}\" is not in i18n.locales {:?}", self.default, self.locales);
    }
    Ok(())
  }

  pub fn to_i18n_config(&self) -> I18nConfig {
    I18nConfig { locales: self.locales.clone(), default: self.default.clone() }
  }
}

fn default_locales() -> Vec<String> {
  vec![default_locale()]
}

fn default_locale() -> String {
  "en".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
  #[serde(default = "default_pretty")]
  pub pretty: bool,
}

impl Default for OutputSection {
  fn default() -> Self {
    Self { pretty: default_pretty() }
  }
}

fn default_pretty() -> bool {
  true
}
