/* src/server/core/rust/src/resolve.rs */

use std::collections::HashSet;

pub const LOCALE_COOKIE: &str = "sharepage-locale";

/// Locales the front end serves, plus the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
  pub locales: Vec<String>,
  pub default: String,
}

impl Default for I18nConfig {
  fn default() -> Self {
    Self { locales: vec!["en".to_string()], default: "en".to_string() }
  }
}

pub struct ResolveContext<'a> {
  pub explicit_locale: Option<&'a str>,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
  pub i18n: &'a I18nConfig,
}

/// Resolve chain: explicit -> cookie("sharepage-locale") -> Accept-Language -> default
pub fn default_resolve(ctx: &ResolveContext<'_>) -> String {
  if let Some(loc) = ctx.explicit_locale {
    return loc.to_string();
  }

  let locale_set: HashSet<&str> = ctx.i18n.locales.iter().map(String::as_str).collect();

  if let Some(header) = ctx.cookie_header
    && let Some(loc) = parse_cookie_locale(header, LOCALE_COOKIE, &locale_set)
  {
    return loc;
  }

  if let Some(header) = ctx.accept_language
    && let Some(loc) = parse_accept_language(header, &locale_set)
  {
    return loc;
  }

  ctx.i18n.default.clone()
}

fn parse_cookie_locale(header: &str, name: &str, locale_set: &HashSet<&str>) -> Option<String> {
  for pair in header.split(';') {
    if let Some((k, v)) = pair.trim().split_once('=')
      && k.trim() == name
    {
      let v = v.trim();
      if locale_set.contains(v) {
        return Some(v.to_string());
      }
    }
  }
  None
}

fn parse_accept_language(header: &str, locale_set: &HashSet<&str>) -> Option<String> {
  if header.is_empty() {
    return None;
  }

  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    let mut q = 1.0_f64;
    for s in segments {
      if let Some(val) = s.trim().strip_prefix("q=")
        && let Ok(v) = val.parse::<f64>()
      {
        q = v;
      }
    }
    entries.push((lang, q));
  }

  // Stable sort keeps header order among equal weights
  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

  for (lang, _) in &entries {
    if locale_set.contains(lang) {
      return Some((*lang).to_string());
    }
    // Prefix match: de-AT -> de
    if let Some((prefix, _)) = lang.split_once('-')
      && locale_set.contains(prefix)
    {
      return Some(prefix.to_string());
    }
  }

  None
}
