/* src/cli/core/src/model.rs */

use anyhow::{Context, Result};
use sharepage_server::{POST_EDIT_PAGE, PageModel, PageServer, RequestContext, RequestParts};

use crate::config::SharepageConfig;

/// Request description gathered from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ModelRequest {
  pub url: Option<String>,
  pub site: Option<String>,
  pub post_id: Option<String>,
  pub locale: Option<String>,
  pub accept_language: Option<String>,
  pub cookie: Option<String>,
}

pub fn page_server(config: &SharepageConfig) -> Result<PageServer> {
  let server = PageServer::with_defaults().context("failed to register pages")?;
  Ok(server.i18n_config(config.i18n.to_i18n_config()))
}

/// Build the model either by routing `url` or by assembling the context from flags.
pub fn build_model(server: &PageServer, req: &ModelRequest) -> Result<PageModel> {
  let parts = RequestParts {
    url: req.url.as_deref().unwrap_or_default(),
    locale: req.locale.as_deref(),
    cookie_header: req.cookie.as_deref(),
    accept_language: req.accept_language.as_deref(),
  };

  if let Some(ref url) = req.url {
    return server.handle(&parts).with_context(|| format!("failed to build model for {url}"));
  }

  let mut ctx = RequestContext::new(server.resolve_locale(&parts));
  if let Some(ref site) = req.site {
    ctx = ctx.with_template_arg("site", site);
  }
  if let Some(ref post_id) = req.post_id {
    ctx = ctx.with_arg("postId", post_id);
  }
  Ok(server.build_model(POST_EDIT_PAGE, &ctx)?)
}

pub fn render_json(model: &PageModel, pretty: bool) -> Result<String> {
  let json = if pretty { serde_json::to_string_pretty(model) } else { serde_json::to_string(model) };
  json.context("failed to serialize page model")
}
