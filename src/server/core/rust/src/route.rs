/* src/server/core/rust/src/route.rs */

use std::collections::HashMap;
use std::sync::OnceLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::errors::PageError;

fn param_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^\{([A-Za-z_][A-Za-z0-9_]*)\}$").unwrap())
}

/// A compiled page route such as `/site/{site}/blog-postedit`.
/// Each `{name}` segment captures one path segment as a template argument.
#[derive(Debug, Clone)]
pub struct RoutePattern {
  pattern: String,
  regex: Regex,
  params: Vec<String>,
}

impl RoutePattern {
  pub fn parse(pattern: &str) -> Result<Self, PageError> {
    if !pattern.starts_with('/') {
      return Err(PageError::validation(format!("route '{pattern}' must start with '/'")));
    }

    let mut source = String::from("^");
    let mut params = Vec::new();
    for segment in pattern.split('/').skip(1) {
      if segment.is_empty() {
        continue;
      }
      source.push('/');
      if let Some(caps) = param_re().captures(segment) {
        let name = caps[1].to_string();
        if params.contains(&name) {
          return Err(PageError::validation(format!(
            "route '{pattern}' declares '{{{name}}}' twice"
          )));
        }
        source.push_str(&format!("(?P<{name}>[^/]+)"));
        params.push(name);
      } else if segment.contains('{') || segment.contains('}') {
        return Err(PageError::validation(format!(
          "route '{pattern}' has malformed segment '{segment}'"
        )));
      } else {
        source.push_str(&regex::escape(segment));
      }
    }
    source.push_str("/?$");

    let regex = Regex::new(&source).map_err(|e| PageError::validation(e.to_string()))?;
    Ok(Self { pattern: pattern.to_string(), regex, params })
  }

  pub fn as_str(&self) -> &str {
    &self.pattern
  }

  /// Match a request path, returning decoded template arguments on success.
  pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
    let caps = self.regex.captures(path)?;
    let args = self
      .params
      .iter()
      .filter_map(|name| caps.name(name).map(|m| (name.clone(), decode_segment(m.as_str()))))
      .collect();
    Some(args)
  }
}

/// Path segments only carry `%XX` escapes; `+` is a literal plus.
fn decode_segment(raw: &str) -> String {
  percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Split `path?query` into its two halves; the query half is empty when absent.
pub fn split_url(url: &str) -> (&str, &str) {
  let url = url.split_once('#').map_or(url, |(before, _)| before);
  url.split_once('?').unwrap_or((url, ""))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn matches_site_segment() {
    let route = RoutePattern::parse("/site/{site}/blog-postedit").unwrap();
    let args = route.matches("/site/swsdp/blog-postedit").unwrap();
    assert_eq!(args.get("site").map(String::as_str), Some("swsdp"));
    assert_eq!(args.len(), 1);
  }

  #[test]
  fn trailing_slash_accepted() {
    let route = RoutePattern::parse("/site/{site}/blog-postedit").unwrap();
    assert!(route.matches("/site/swsdp/blog-postedit/").is_some());
  }

  #[test]
  fn static_route_has_no_args() {
    let route = RoutePattern::parse("/blog-postedit").unwrap();
    assert_eq!(route.matches("/blog-postedit").unwrap().len(), 0);
    assert!(route.matches("/blog-postedit/extra").is_none());
  }

  #[test]
  fn segment_is_decoded() {
    let route = RoutePattern::parse("/site/{site}/blog-postedit").unwrap();
    let args = route.matches("/site/my%20site/blog-postedit").unwrap();
    assert_eq!(args.get("site").map(String::as_str), Some("my site"));
  }

  #[test]
  fn plus_in_segment_is_literal() {
    let route = RoutePattern::parse("/site/{site}/blog-postedit").unwrap();
    let args = route.matches("/site/c++/blog-postedit").unwrap();
    assert_eq!(args.get("site").map(String::as_str), Some("c++"));
  }

  #[test]
  fn literal_dots_are_escaped() {
    let route = RoutePattern::parse("/page.html").unwrap();
    assert!(route.matches("/pageXhtml").is_none());
    assert!(route.matches("/page.html").is_some());
  }

  #[test]
  fn rejects_relative_route() {
    let err = RoutePattern::parse("site/{site}").unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
  }

  #[test]
  fn rejects_duplicate_param() {
    assert!(RoutePattern::parse("/{a}/{a}").is_err());
  }

  #[test]
  fn rejects_malformed_segment() {
    assert!(RoutePattern::parse("/site/{site").is_err());
    assert!(RoutePattern::parse("/site/x{site}").is_err());
  }

  #[test]
  fn split_url_parts() {
    assert_eq!(split_url("/blog-postedit?postId=1"), ("/blog-postedit", "postId=1"));
    assert_eq!(split_url("/blog-postedit"), ("/blog-postedit", ""));
    assert_eq!(split_url("/blog-postedit?postId=1#top"), ("/blog-postedit", "postId=1"));
  }
}
