/* src/server/core/rust/src/page.rs */

use std::sync::Arc;

use crate::context::RequestContext;
use crate::errors::PageError;
use crate::model::PageModel;
use crate::route::RoutePattern;

/// Server-side script for one page: reads the request context, appends to the model.
pub trait PageController: Send + Sync {
  fn build(&self, ctx: &RequestContext, model: &mut PageModel);
}

impl<F> PageController for F
where
  F: Fn(&RequestContext, &mut PageModel) + Send + Sync,
{
  fn build(&self, ctx: &RequestContext, model: &mut PageModel) {
    self(ctx, model);
  }
}

pub struct PageDef {
  pub id: String,
  pub route: RoutePattern,
  pub controller: Arc<dyn PageController>,
}

impl PageDef {
  pub fn new(
    id: impl Into<String>,
    route: &str,
    controller: impl PageController + 'static,
  ) -> Result<Self, PageError> {
    Ok(Self { id: id.into(), route: RoutePattern::parse(route)?, controller: Arc::new(controller) })
  }
}
