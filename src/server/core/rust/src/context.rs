/* src/server/core/rust/src/context.rs */

use std::collections::HashMap;

/// Request-scoped input handed to a page controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
  pub locale: String,
  pub page: PageContext,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
  pub url: PageUrl,
}

/// Arguments extracted from the request URL.
/// `template_args` come from the matched path pattern, `args` from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageUrl {
  pub template_args: HashMap<String, String>,
  pub args: HashMap<String, String>,
}

impl PageUrl {
  pub fn template_arg(&self, key: &str) -> Option<&str> {
    self.template_args.get(key).map(String::as_str)
  }

  pub fn arg(&self, key: &str) -> Option<&str> {
    self.args.get(key).map(String::as_str)
  }
}

impl RequestContext {
  pub fn new(locale: impl Into<String>) -> Self {
    Self { locale: locale.into(), page: PageContext::default() }
  }

  pub fn with_template_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.page.url.template_args.insert(key.into(), value.into());
    self
  }

  pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.page.url.args.insert(key.into(), value.into());
    self
  }

  pub fn with_url(mut self, url: PageUrl) -> Self {
    self.page.url = url;
    self
  }
}

/// Parse a raw query string (without the leading `?`) into decoded key/value pairs.
/// A bare key is present with an empty value; the first occurrence of a key wins.
pub fn parse_query(query: &str) -> HashMap<String, String> {
  let mut args = HashMap::new();
  for (key, value) in form_urlencoded::parse(query.as_bytes()) {
    if key.is_empty() {
      continue;
    }
    args.entry(key.into_owned()).or_insert_with(|| value.into_owned());
  }
  args
}
