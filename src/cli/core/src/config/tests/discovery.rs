/* src/cli/core/src/config/tests/discovery.rs */

use super::*;

#[test]
fn finds_config_in_ancestor() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join(CONFIG_FILE), "[i18n]\nlocales = [\"en\", \"de\"]\n").unwrap();
  let nested = tmp.path().join("site/blog");
  std::fs::create_dir_all(&nested).unwrap();

  let found = find_config(&nested).unwrap().unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join(CONFIG_FILE));

  let config = resolve_config(None, &nested).unwrap();
  assert_eq!(config.i18n.locales, vec!["en", "de"]);
}

#[test]
fn explicit_path_wins() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join(CONFIG_FILE), "[output]\npretty = true\n").unwrap();
  let explicit = tmp.path().join("other.toml");
  std::fs::write(&explicit, "[output]\npretty = false\n").unwrap();

  let config = resolve_config(Some(&explicit), tmp.path()).unwrap();
  assert!(!config.output.pretty);
}

#[test]
fn missing_explicit_path_errors() {
  let tmp = tempfile::tempdir().unwrap();
  let err = resolve_config(Some(&tmp.path().join("nope.toml")), tmp.path()).unwrap_err();
  assert!(err.to_string().contains("failed to read"), "{err}");
}
