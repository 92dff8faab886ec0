/* src/server/core/rust/src/server.rs */

use tracing::debug;

use crate::context::{PageUrl, RequestContext, parse_query};
use crate::errors::PageError;
use crate::model::PageModel;
use crate::page::PageDef;
use crate::postedit::PostEditModelBuilder;
use crate::resolve::{I18nConfig, ResolveContext, default_resolve};
use crate::route::split_url;

pub const POST_EDIT_PAGE: &str = "blog-postedit";

/// Raw request data a page is served from.
#[derive(Debug, Clone, Default)]
pub struct RequestParts<'a> {
  /// Path plus optional query string, e.g. `/site/swsdp/blog-postedit?postId=1`
  pub url: &'a str,
  pub locale: Option<&'a str>,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
}

pub struct PageServer {
  pages: Vec<PageDef>,
  i18n_config: I18nConfig,
}

impl PageServer {
  pub fn new() -> Self {
    Self { pages: Vec::new(), i18n_config: I18nConfig::default() }
  }

  /// Registry with the blog post editor page mounted with and without a site segment.
  pub fn with_defaults() -> Result<Self, PageError> {
    Ok(
      Self::new()
        .page(PageDef::new(POST_EDIT_PAGE, "/site/{site}/blog-postedit", PostEditModelBuilder)?)
        .page(PageDef::new(POST_EDIT_PAGE, "/blog-postedit", PostEditModelBuilder)?),
    )
  }

  pub fn page(mut self, page: PageDef) -> Self {
    self.pages.push(page);
    self
  }

  pub fn i18n_config(mut self, config: I18nConfig) -> Self {
    self.i18n_config = config;
    self
  }

  pub fn routes(&self) -> Vec<(&str, &str)> {
    self.pages.iter().map(|p| (p.id.as_str(), p.route.as_str())).collect()
  }

  pub fn resolve_locale(&self, req: &RequestParts<'_>) -> String {
    default_resolve(&ResolveContext {
      explicit_locale: req.locale,
      cookie_header: req.cookie_header,
      accept_language: req.accept_language,
      i18n: &self.i18n_config,
    })
  }

  /// Route a request to the first matching page and build a fresh model for it.
  pub fn handle(&self, req: &RequestParts<'_>) -> Result<PageModel, PageError> {
    let (path, query) = split_url(req.url);
    let Some((page, template_args)) =
      self.pages.iter().find_map(|p| p.route.matches(path).map(|args| (p, args)))
    else {
      debug!(path, "no page matches");
      return Err(PageError::not_found(format!("no page matches {path}")));
    };
    debug!(page = %page.id, route = page.route.as_str(), "page matched");

    let ctx = RequestContext::new(self.resolve_locale(req))
      .with_url(PageUrl { template_args, args: parse_query(query) });
    let mut model = PageModel::new();
    page.controller.build(&ctx, &mut model);
    Ok(model)
  }

  /// Run a page's controller by id against an already-assembled context.
  pub fn build_model(&self, page_id: &str, ctx: &RequestContext) -> Result<PageModel, PageError> {
    let page = self
      .pages
      .iter()
      .find(|p| p.id == page_id)
      .ok_or_else(|| PageError::not_found(format!("unknown page '{page_id}'")))?;
    let mut model = PageModel::new();
    page.controller.build(ctx, &mut model);
    Ok(model)
  }
}

impl Default for PageServer {
  fn default() -> Self {
    Self::new()
  }
}
