/* src/server/core/rust/src/widget.rs */

use serde::Serialize;

pub const BLOG_POST_EDIT_WIDGET: &str = "Alfresco.BlogPostEdit";
pub const BLOG_CONTAINER_ID: &str = "blog";

const TOOLBAR_BUTTONS: &str =
  "bold,italic,underline,|,bullist,numlist,|,forecolor,|,undo,redo,removeformat";

/// First two characters of a locale such as `en_US`.
/// Shorter locales pass through unchanged.
pub fn language_code(locale: &str) -> String {
  locale.chars().take(2).collect()
}

/// Rich-text editor display options. Key names are the editor's own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorConfig {
  pub inline_styles: bool,
  pub convert_fonts_to_spans: bool,
  pub theme: String,
  pub theme_advanced_buttons1: String,
  pub theme_advanced_toolbar_location: String,
  pub theme_advanced_toolbar_align: String,
  pub theme_advanced_statusbar_location: String,
  pub theme_advanced_resizing: bool,
  pub theme_advanced_buttons2: Option<String>,
  pub theme_advanced_buttons3: Option<String>,
  pub theme_advanced_path: bool,
  pub language: String,
}

impl EditorConfig {
  pub fn for_locale(locale: &str) -> Self {
    Self {
      inline_styles: false,
      convert_fonts_to_spans: false,
      theme: "advanced".to_string(),
      theme_advanced_buttons1: TOOLBAR_BUTTONS.to_string(),
      theme_advanced_toolbar_location: "top".to_string(),
      theme_advanced_toolbar_align: "left".to_string(),
      theme_advanced_statusbar_location: "bottom".to_string(),
      theme_advanced_resizing: true,
      theme_advanced_buttons2: None,
      theme_advanced_buttons3: None,
      theme_advanced_path: false,
      language: language_code(locale),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEditOptions {
  pub site_id: String,
  pub container_id: String,
  pub edit_mode: bool,
  pub post_id: String,
  pub editor_config: EditorConfig,
}

/// Tells the rendering layer which client-side component to instantiate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetDescriptor {
  pub name: String,
  pub options: PostEditOptions,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn language_code_truncates() {
    assert_eq!(language_code("en_US"), "en");
    assert_eq!(language_code("de"), "de");
  }

  #[test]
  fn language_code_short_locale_passes_through() {
    assert_eq!(language_code("e"), "e");
    assert_eq!(language_code(""), "");
  }

  #[test]
  fn language_code_counts_chars_not_bytes() {
    assert_eq!(language_code("ñú_ES"), "ñú");
  }

  #[test]
  fn editor_config_serializes_with_nulls() {
    let json = serde_json::to_value(EditorConfig::for_locale("fr_FR")).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "inline_styles": false,
        "convert_fonts_to_spans": false,
        "theme": "advanced",
        "theme_advanced_buttons1": TOOLBAR_BUTTONS,
        "theme_advanced_toolbar_location": "top",
        "theme_advanced_toolbar_align": "left",
        "theme_advanced_statusbar_location": "bottom",
        "theme_advanced_resizing": true,
        "theme_advanced_buttons2": null,
        "theme_advanced_buttons3": null,
        "theme_advanced_path": false,
        "language": "fr"
      })
    );
  }

  #[test]
  fn options_use_camel_case_keys() {
    let options = PostEditOptions {
      site_id: "swsdp".into(),
      container_id: BLOG_CONTAINER_ID.into(),
      edit_mode: false,
      post_id: String::new(),
      editor_config: EditorConfig::for_locale("en"),
    };
    let json = serde_json::to_value(&options).unwrap();
    let obj = json.as_object().unwrap();
    for key in ["siteId", "containerId", "editMode", "postId", "editorConfig"] {
      assert!(obj.contains_key(key), "missing {key}");
    }
    assert_eq!(obj.len(), 5);
  }
}
